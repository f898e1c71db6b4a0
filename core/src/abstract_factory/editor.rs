//! Language-aware editors.
//!
//! An editor needs a scanner and a parser that agree on the document
//! language. A [`LanguageFactory`] hands out both, so an editor can't pair an
//! HTML scanner with a PHP parser.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use creational_common::DemoError;
use tracing::debug;

pub trait Scanner {
    fn scan(&self) -> String;
}

pub trait Parser {
    fn parse(&self) -> String;
}

/// Builds a matching scanner and parser for one document language.
pub trait LanguageFactory {
    fn create_parser(&self) -> Box<dyn Parser>;

    fn create_scanner(&self) -> Box<dyn Scanner>;

    fn language(&self) -> Language;
}

/// The closed set of editor languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Html,
    Js,
    Php,
}

impl Language {
    /// The order the editor demo visits them.
    pub const DEMO_ORDER: [Language; 3] = [Language::Php, Language::Html, Language::Js];

    pub fn factory(self) -> Box<dyn LanguageFactory> {
        match self {
            Language::Html => Box::new(HtmlFactory),
            Language::Js => Box::new(JsFactory),
            Language::Php => Box::new(PhpFactory),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Html => write!(f, "HTML"),
            Language::Js => write!(f, "JS"),
            Language::Php => write!(f, "PHP"),
        }
    }
}

impl FromStr for Language {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Language::Html),
            "js" | "javascript" => Ok(Language::Js),
            "php" => Ok(Language::Php),
            _ => Err(DemoError::UnknownLanguage(s.to_string())),
        }
    }
}

// Scanners and parsers only differ by the language they name.
macro_rules! language_products {
    ($($lang:ident => $scanner:ident, $parser:ident, $factory:ident;)*) => {
        $(
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $scanner;

            #[derive(Debug, Clone, Copy, Default)]
            pub struct $parser;

            #[derive(Debug, Clone, Copy, Default)]
            pub struct $factory;

            impl Scanner for $scanner {
                fn scan(&self) -> String {
                    format!("I scan {} Docs", Language::$lang)
                }
            }

            impl Parser for $parser {
                fn parse(&self) -> String {
                    format!("I parse {} Docs", Language::$lang)
                }
            }

            impl LanguageFactory for $factory {
                fn create_parser(&self) -> Box<dyn Parser> {
                    debug!(language = %Language::$lang, "building parser");
                    Box::new($parser)
                }

                fn create_scanner(&self) -> Box<dyn Scanner> {
                    debug!(language = %Language::$lang, "building scanner");
                    Box::new($scanner)
                }

                fn language(&self) -> Language {
                    Language::$lang
                }
            }
        )*
    };
}

language_products! {
    Html => HtmlScanner, HtmlParser, HtmlFactory;
    Js => JsScanner, JsParser, JsFactory;
    Php => PhpScanner, PhpParser, PhpFactory;
}

pub struct Editor {
    language: Language,
    parser: Box<dyn Parser>,
    scanner: Box<dyn Scanner>,
}

impl Editor {
    pub fn new(factory: &dyn LanguageFactory) -> Self {
        Self {
            language: factory.language(),
            parser: factory.create_parser(),
            scanner: factory.create_scanner(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn scan(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        writeln!(out, "{}", self.scanner.scan())?;
        Ok(())
    }

    pub fn parse(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        writeln!(out, "{}", self.parser.parse())?;
        Ok(())
    }
}
