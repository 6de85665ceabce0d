//! Shaping query results for TeX.
//!
//! Values looked up from the host (paths, locale identifiers, calendar names,
//! timestamps) are printed one per line and read back by TeX, so they need the
//! same care with special characters as translated patterns.

use crate::escape::{escape_str, Context};

/// Escape `#`, the only character TeX cannot take verbatim in a file name.
pub fn escape_hash(s: &str) -> String {
    s.replace('#', "\\#")
}

/// Convert a host path to the form TeX expects.
///
/// On hosts whose separator is a backslash the separators become `/`; hashes
/// are escaped either way.
pub fn to_tex_path(path: &str, separator: char) -> String {
    if separator == '\\' {
        escape_hash(&path.replace('\\', "/"))
    } else {
        escape_hash(path)
    }
}

/// Convert a TeX path back to the host form.
pub fn from_tex_path(path: &str, separator: char) -> String {
    if separator == '/' {
        path.to_string()
    } else {
        path.replace('/', &separator.to_string())
    }
}

/// Wrap a result in braces when several results are printed together.
pub fn group(info: &str, grouped: bool) -> String {
    if grouped {
        format!("{{{}}}", info)
    } else {
        info.to_string()
    }
}

/// Render a list of names (months, weekdays) as `{first}{second}...`, each
/// escaped as natural-language text.
pub fn brace_list<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for name in names {
        result.push('{');
        result.push_str(&escape_str(name.as_ref(), Context::Text));
        result.push('}');
    }
    result
}

/// Components of a POSIX-style locale identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleId {
    pub language: String,
    pub country: String,
    pub codeset: String,
    pub script: String,
}

impl LocaleId {
    pub fn new(language: &str, country: &str) -> Self {
        LocaleId {
            language: language.to_string(),
            country: country.to_string(),
            ..Default::default()
        }
    }

    pub fn with_codeset(mut self, codeset: &str) -> Self {
        self.codeset = codeset.to_string();
        self
    }

    pub fn with_script(mut self, script: &str) -> Self {
        self.script = script.to_string();
        self
    }

    /// Format as `language-COUNTRY.codeset@script`, omitting empty parts.
    ///
    /// With `convert_codeset` the codeset is lowercased and stripped of
    /// hyphens (`UTF-8` becomes `utf8`).
    pub fn identifier(&self, convert_codeset: bool) -> String {
        let mut id = self.language.clone();

        if !self.country.is_empty() {
            if !id.is_empty() {
                id.push('-');
            }
            id.push_str(&self.country);
        }

        if !self.codeset.is_empty() {
            id.push('.');
            if convert_codeset {
                id.push_str(&self.codeset.to_lowercase().replace('-', ""));
            } else {
                id.push_str(&self.codeset);
            }
        }

        if !self.script.is_empty() {
            id.push('@');
            id.push_str(&escape_hash(&self.script));
        }

        id
    }
}

/// Format a timestamp as a PDF date string, `D:YYYYMMDDHHmmSS+HH'mm'`.
#[cfg(feature = "chrono")]
pub fn pdf_date<Tz>(datetime: &chrono::DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let offset = datetime.format("%z").to_string();
    let (hours, minutes) = offset.split_at(offset.len().min(3));
    format!(
        "D:{}{}'{}'",
        datetime.format("%Y%m%d%H%M%S"),
        hours,
        minutes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tex_path() {
        assert_eq!(to_tex_path("C:\\docs\\#1.tex", '\\'), "C:/docs/\\#1.tex");
        assert_eq!(to_tex_path("/home/a#b", '/'), "/home/a\\#b");
    }

    #[test]
    fn test_from_tex_path() {
        assert_eq!(from_tex_path("C:/docs/a.tex", '\\'), "C:\\docs\\a.tex");
        assert_eq!(from_tex_path("/tmp/a.tex", '/'), "/tmp/a.tex");
    }

    #[test]
    fn test_group() {
        assert_eq!(group("x", true), "{x}");
        assert_eq!(group("x", false), "x");
    }

    #[test]
    fn test_locale_identifier() {
        let id = LocaleId::new("en", "GB").with_codeset("UTF-8");
        assert_eq!(id.identifier(false), "en-GB.UTF-8");
        assert_eq!(id.identifier(true), "en-GB.utf8");

        let id = LocaleId::new("", "US").with_script("La#n");
        assert_eq!(id.identifier(false), "US@La\\#n");
    }
}
