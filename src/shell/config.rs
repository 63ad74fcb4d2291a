//! Session configuration.
//!
//! [`Settings`] is the bundle a session is created from: the two character
//! callbacks plus the serializable part, [`Config`], which can be kept as a
//! small JSON document (for example in flash) and loaded with
//! [`Config::from_json`] or [`Config::from_json_escaped`].

use heapless::String;
use serde::{Deserialize, Serialize};
use serde_json_core::str::{EscapedStr, EscapedStringFragment};

use super::error::Error;
use super::input::ASCII_LF;

/// Character-input function.
///
/// Returns the next character, or `None` when no character is available.
/// It may block. [`Cli::run`](super::Cli::run) stops on `None`, while
/// [`Cli::read_line`](super::Cli::read_line) keeps polling.
pub type GetCharFn = fn() -> Option<u8>;

/// Character-output function. Assumed not to fail.
pub type SendCharFn = fn(u8);

/// Everything needed to create a session.
///
/// The callbacks are optional so a partially filled bundle can be passed
/// around; creating a session from one that lacks a callback fails with
/// [`Error::MissingGetChar`] or [`Error::MissingSendChar`].
///
/// # Examples
///
/// ```rust
/// use libcli::shell::Settings;
///
/// fn uart_read() -> Option<u8> {
///     None
/// }
///
/// fn uart_write(_c: u8) {}
///
/// let settings = Settings {
///     get_char: Some(uart_read),
///     send_char: Some(uart_write),
///     input_end_char: b'\r',
///     prompt: Some("dev> "),
/// };
/// assert_eq!(settings.input_end_char, b'\r');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    /// Source of input characters.
    pub get_char: Option<GetCharFn>,
    /// Sink for echoed characters and command output.
    pub send_char: Option<SendCharFn>,
    /// Character that completes a line.
    pub input_end_char: u8,
    /// Prompt echoed after every dispatched line.
    pub prompt: Option<&'a str>,
}

impl Default for Settings<'_> {
    fn default() -> Self {
        Self {
            get_char: None,
            send_char: None,
            input_end_char: ASCII_LF,
            prompt: None,
        }
    }
}

impl<'a> Settings<'a> {
    /// The serializable part of these settings.
    pub fn config(&self) -> Config<'a> {
        Config {
            input_end_char: self.input_end_char,
            prompt: self.prompt,
        }
    }
}

fn default_input_end_char() -> u8 {
    ASCII_LF
}

/// Serializable session options.
///
/// Missing fields fall back to an LF terminator and no prompt.
///
/// # Examples
///
/// ```rust
/// use libcli::shell::Config;
///
/// let config = Config::from_json(r#"{"input_end_char":13,"prompt":"> "}"#).unwrap();
/// assert_eq!(config.input_end_char, b'\r');
/// assert_eq!(config.prompt, Some("> "));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config<'a> {
    /// Character that completes a line.
    pub input_end_char: u8,
    /// Prompt echoed after every dispatched line.
    pub prompt: Option<&'a str>,
}

/// Wire form of [`Config`], with the prompt still JSON-escaped.
#[derive(Deserialize)]
struct RawConfig<'a> {
    #[serde(default = "default_input_end_char")]
    input_end_char: u8,
    #[serde(borrow, default)]
    prompt: Option<EscapedStr<'a>>,
}

impl<'a> RawConfig<'a> {
    fn parse(json: &'a str) -> Result<Self, Error> {
        serde_json_core::from_str(json)
            .map(|(raw, _)| raw)
            .map_err(|_| Error::InvalidConfig)
    }
}

/// Decode the escape sequences of `escaped` into `scratch`.
fn unescape<'b>(escaped: EscapedStr<'_>, scratch: &'b mut [u8]) -> Result<&'b str, Error> {
    let mut len = 0;
    for fragment in escaped.fragments() {
        let mut utf8 = [0; 4];
        let bytes = match fragment.map_err(|_| Error::InvalidConfig)? {
            EscapedStringFragment::NotEscaped(text) => text.as_bytes(),
            EscapedStringFragment::Escaped(c) => c.encode_utf8(&mut utf8).as_bytes(),
        };
        scratch
            .get_mut(len..len + bytes.len())
            .ok_or(Error::InvalidConfig)?
            .copy_from_slice(bytes);
        len += bytes.len();
    }
    core::str::from_utf8(&scratch[..len]).map_err(|_| Error::InvalidConfig)
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            input_end_char: ASCII_LF,
            prompt: None,
        }
    }
}

impl<'a> Config<'a> {
    /// Parse a JSON document, borrowing the prompt from `json`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidConfig`] - malformed JSON, or a prompt containing an
    ///   escape sequence (use [`Config::from_json_escaped`] for those)
    pub fn from_json(json: &'a str) -> Result<Self, Error> {
        let raw = RawConfig::parse(json)?;
        let prompt = match raw.prompt {
            Some(EscapedStr(prompt)) if prompt.contains('\\') => {
                warn!("cli: escaped prompt needs a scratch buffer");
                return Err(Error::InvalidConfig);
            }
            prompt => prompt.map(|EscapedStr(prompt)| prompt),
        };

        Ok(Self {
            input_end_char: raw.input_end_char,
            prompt,
        })
    }

    /// Parse a JSON document, decoding escape sequences in the prompt into
    /// `scratch`. Reads back anything written by [`Config::to_json`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidConfig`] - malformed JSON, an invalid escape sequence,
    ///   or a decoded prompt longer than `scratch`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::shell::Config;
    ///
    /// let mut scratch = [0; 16];
    /// let config = Config::from_json_escaped(r#"{"prompt":"\r\n> "}"#, &mut scratch).unwrap();
    /// assert_eq!(config.prompt, Some("\r\n> "));
    /// ```
    pub fn from_json_escaped(json: &'a str, scratch: &'a mut [u8]) -> Result<Self, Error> {
        let raw = RawConfig::parse(json)?;
        let prompt = match raw.prompt {
            Some(prompt) => Some(unescape(prompt, scratch)?),
            None => None,
        };

        Ok(Self {
            input_end_char: raw.input_end_char,
            prompt,
        })
    }

    /// Serialize into a JSON document of at most `M` bytes.
    pub fn to_json<const M: usize>(&self) -> Result<String<M>, Error> {
        serde_json_core::to_string(self).map_err(|_| Error::InvalidConfig)
    }

    /// Combine with the character callbacks into a full [`Settings`] bundle.
    pub fn into_settings(self, get_char: GetCharFn, send_char: SendCharFn) -> Settings<'a> {
        Settings {
            get_char: Some(get_char),
            send_char: Some(send_char),
            input_end_char: self.input_end_char,
            prompt: self.prompt,
        }
    }
}
