// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the artifact store in Layer 6 that persists the weights.
//
// What's in this layer:
//
//   model.rs     — The group classifier architecture
//                  A category embedding concatenated with the
//                  standardized time feature, passed through a
//                  small feed-forward head producing one logit
//                  per group.
//
//   predictor.rs — The inference engine
//                  Rebuilds the model from the artifact store,
//                  encodes one feature row into tensors, runs
//                  the forward pass, and argmaxes the logits
//                  into a raw class index.
//
// The backend is burn's CPU NdArray backend: a one-shot process
// must not require a GPU device.
//
// Reference: Burn Book §3 (Building Blocks)

/// Group classifier architecture
pub mod model;

/// Inference engine — loads the artifact and scores one row
pub mod predictor;
