// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The heart of the application — pure Rust structs, enums and
// traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The raw input record parsed from the invocation argument
pub mod record;

// The declared feature schema and the validated one-row frame
pub mod feature;

// The category label → index vocabulary the classifier was trained with
pub mod category;

// Raw class index and the 1-based group label derived from it
pub mod prediction;

// The structured success/error output shape
pub mod report;

// The error taxonomy for every pipeline stage
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
