use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Garden has nothing planted yet, call `create_rose` first")]
    NothingPlanted,

    #[error("Unknown appliance brand `{0}`")]
    UnknownBrand(String),

    #[error("Unknown editor language `{0}`")]
    UnknownLanguage(String),

    #[error("Failed to write demo output: {0}")]
    Output(#[from] std::io::Error),
}
