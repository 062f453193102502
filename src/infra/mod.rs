// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Persistence of the model artifact — the only filesystem
// surface of the whole pipeline:
//
//   artifact.rs    — Model weights and model config
//                    Uses Burn's CompactRecorder for the weight
//                    file and serde_json for the config, so
//                    inference can rebuild the exact
//                    architecture before loading weights into it.
//
//   vocab_store.rs — Category vocabulary persistence
//                    The label → index mapping captured at
//                    training time, saved as plain JSON next to
//                    the weights. Ensures inference encodes
//                    categories exactly as training did.
//
// The predict pipeline only ever reads; the save half of each
// store exists for the external trainer and for tests that
// deploy throwaway artifacts.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Records and Checkpointing)

/// Model weight and config persistence
pub mod artifact;

/// Category vocabulary persistence
pub mod vocab_store;
