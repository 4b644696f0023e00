use thiserror::Error;
use tiktoken_rs::CoreBPE;

/// Opaque token unit. Matches tiktoken's rank type.
pub type Token = u32;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("no tokenizer known for model '{model}': {reason}")]
    UnknownModel { model: String, reason: String },

    #[error("failed to decode token sequence: {0}")]
    Decode(String),
}

/// Encode/decode contract the chunk planner is built on.
///
/// `decode(encode(s))` must reproduce `s` for any text the target model
/// accepts. Whitespace normalization happens before tokenization, never
/// inside it.
pub trait Tokenizer: Send + Sync {
    fn encode(&self, text: &str) -> Vec<Token>;

    /// Reconstruct text from a token subsequence.
    ///
    /// Tokens are byte sequences, so a chunk boundary can split a
    /// multi-byte character across two slices. Decoding substitutes
    /// U+FFFD for the stranded bytes rather than failing the document;
    /// a full encoded sequence always reconstructs exactly.
    fn decode(&self, tokens: &[Token]) -> Result<String, TokenizerError>;

    /// Token count for a piece of text.
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

/// Production tokenizer backed by tiktoken's BPE vocabularies, so counts
/// match what the model actually sees.
pub struct TiktokenTokenizer {
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    /// Look up the BPE vocabulary for a model identifier.
    pub fn for_model(model: &str) -> Result<Self, TokenizerError> {
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|e| {
            TokenizerError::UnknownModel {
                model: model.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { bpe })
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn encode(&self, text: &str) -> Vec<Token> {
        self.bpe.encode_ordinary(text)
    }

    fn decode(&self, tokens: &[Token]) -> Result<String, TokenizerError> {
        let mut bytes = Vec::new();
        for piece in self.bpe._decode_native_and_split(tokens.to_vec()) {
            bytes.extend_from_slice(&piece);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
