// ABOUTME: Scanner for literal markup embedded in text content (inline XHTML-like tags).
// ABOUTME: A cursor-based tokenizer, deliberately simpler than an XML parser.

use crate::error::RssError;

/// One token produced by [`scan`]. Borrowed slices of the input buffer.
#[derive(Debug, PartialEq)]
pub(crate) enum MarkupToken<'a> {
    /// Plain character data.
    Text(&'a str),
    /// An opening tag with its attributes in source order.
    Start {
        name: &'a str,
        attributes: Vec<(&'a str, &'a str)>,
    },
    /// A self-closing tag with its attributes in source order.
    Empty {
        name: &'a str,
        attributes: Vec<(&'a str, &'a str)>,
    },
    /// A closing tag.
    End(&'a str),
}

/// Tokenizes a text buffer containing zero or more literal markup
/// fragments into the equivalent text/start/empty/end tokens.
///
/// The grammar is intentionally loose, matching hand-authored inline
/// markup rather than conformant XML:
/// - a tag header runs from `<` to the next `>`; a trailing `/` marks
///   it self-closing;
/// - the header splits on whitespace; the first token is the element
///   name, used verbatim (prefix included);
/// - each remaining token splits on its FIRST `=` into an attribute
///   name and value (values may contain further `=`, e.g. query
///   strings); a surrounding quote pair is dropped; tokens without `=`
///   are ignored;
/// - an open tag's content runs to the literal `</` + name sequence and
///   is emitted as flat character data.
///
/// Comments, CDATA sections, and quoted attribute values containing
/// whitespace are out of scope. A missing `>` or closing sequence
/// fails with [`RssError::MalformedMarkup`]; nothing is salvaged.
pub(crate) fn scan(buf: &str) -> Result<Vec<MarkupToken<'_>>, RssError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < buf.len() {
        let rest = &buf[pos..];
        match rest.find('<') {
            None => {
                tokens.push(MarkupToken::Text(rest));
                break;
            }
            Some(0) => {}
            Some(text_len) => {
                tokens.push(MarkupToken::Text(&rest[..text_len]));
                pos += text_len;
            }
        }

        // pos sits on '<'; the header runs to the matching '>'.
        let after_open = pos + 1;
        let header_len = buf[after_open..].find('>').ok_or_else(|| {
            RssError::malformed(format!("missing '>' for tag at offset {pos}"))
        })?;
        let header = buf[after_open..after_open + header_len].trim();
        let (header, self_closing) = match header.strip_suffix('/') {
            Some(stripped) => (stripped.trim_end(), true),
            None => (header, false),
        };

        let mut parts = header.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| RssError::malformed(format!("empty tag at offset {pos}")))?;
        let attributes: Vec<(&str, &str)> = parts
            .filter_map(|token| token.split_once('='))
            .map(|(attr_name, value)| (attr_name, strip_quotes(value)))
            .collect();

        pos = after_open + header_len + 1;

        if self_closing {
            tokens.push(MarkupToken::Empty { name, attributes });
            continue;
        }

        // Content runs to the literal closing sequence; nested markup
        // inside it stays flat character data.
        let closing = format!("</{name}");
        let content_len = buf[pos..].find(&closing).ok_or_else(|| {
            RssError::malformed(format!("missing closing tag {closing}> for element '{name}'"))
        })?;
        tokens.push(MarkupToken::Start { name, attributes });
        if content_len > 0 {
            tokens.push(MarkupToken::Text(&buf[pos..pos + content_len]));
        }
        tokens.push(MarkupToken::End(name));

        pos += content_len + closing.len();
        let close_end = buf[pos..].find('>').ok_or_else(|| {
            RssError::malformed(format!("unterminated closing tag for element '{name}'"))
        })?;
        pos += close_end + 1;
    }

    Ok(tokens)
}

/// Drops one matching pair of surrounding quotes from an attribute
/// value, so quoted and unquoted inline markup tokenize alike.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}
