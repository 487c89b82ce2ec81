#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    /// The tag does not authenticate the presented block.
    #[error("block tag verification failed")]
    TagMismatch,
}
