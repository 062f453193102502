// ============================================================
// Layer 5 — Group Classifier Model
// ============================================================
// The trained feature space is tiny — one categorical column and
// one float column — so the architecture is a category embedding
// concatenated with the time feature, followed by a two-layer
// feed-forward head over the group logits.

use burn::{
    nn::{Embedding, EmbeddingConfig, Linear, LinearConfig, Relu},
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct GroupClassifierConfig {
    /// Size of the category vocabulary, unknown slot included
    pub num_categories: usize,

    /// Number of group classes the model predicts over
    pub num_groups: usize,

    #[config(default = 16)]
    pub d_embed: usize,

    #[config(default = 32)]
    pub d_hidden: usize,
}

impl GroupClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> GroupClassifierModel<B> {
        let category_embedding =
            EmbeddingConfig::new(self.num_categories, self.d_embed).init(device);
        // +1 input for the concatenated time feature
        let hidden = LinearConfig::new(self.d_embed + 1, self.d_hidden).init(device);
        let output = LinearConfig::new(self.d_hidden, self.num_groups).init(device);
        GroupClassifierModel {
            category_embedding,
            hidden,
            output,
            activation: Relu::new(),
        }
    }
}

#[derive(Module, Debug)]
pub struct GroupClassifierModel<B: Backend> {
    pub category_embedding: Embedding<B>,
    pub hidden:             Linear<B>,
    pub output:             Linear<B>,
    pub activation:         Relu,
}

impl<B: Backend> GroupClassifierModel<B> {
    /// categories: [batch], times: [batch, 1] → logits: [batch, num_groups]
    ///
    /// `times` must already be standardized with the artifact's
    /// (mean, std) — the model sees the same scale it was trained on.
    pub fn forward(
        &self,
        categories: Tensor<B, 1, Int>,
        times:      Tensor<B, 2>,
    ) -> Tensor<B, 2> {
        let [batch_size] = categories.dims();

        // Embedding expects [batch, seq]; each row is a single token
        let embedded = self
            .category_embedding
            .forward(categories.reshape([batch_size, 1]));
        let [_, _, d_embed] = embedded.dims();
        let embedded = embedded.reshape([batch_size, d_embed]);

        // [batch, d_embed + 1]
        let features = Tensor::cat(vec![embedded, times], 1);

        let hidden = self.activation.forward(self.hidden.forward(features));
        self.output.forward(hidden)
    }
}
