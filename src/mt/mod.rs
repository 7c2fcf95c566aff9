/// Machine translation module
///
/// Everything between "we have some text" and "we have a display string":
/// the provider trait, the Google Translate client, the response flattener
/// and a mock for offline tests.
///
/// # Example
///
/// ```ignore
/// use xtranslate::config::Config;
/// use xtranslate::mt::{GoogleTranslateProvider, MachineTranslator};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = GoogleTranslateProvider::new(Config::default())?;
///     let shown = provider.translate("Hello", "en", "fr").await?;
///     println!("{}", shown); // "Bonjour\ninterjection: bonjour, salut"
///     Ok(())
/// }
/// ```
pub mod error;
pub mod google_translate;
pub mod mock;
pub mod response;
pub mod translator;

pub use error::{MtError, MtResult};
pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use response::{
    Segment, TranslationResponse, WordEntry, flatten_response, flatten_text, flatten_words,
};
pub use translator::{MachineTranslator, validate_language};
