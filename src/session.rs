//! Session-level glue between raw options and parsed variants.
//!
//! A [`VariantSession`] holds the variant and setup strings resolved for one
//! test session. Command-line values win over configuration defaults. Nothing is
//! cached: every accessor parses the stored strings again.

use std::fmt;

use serde::Serialize;

use crate::config::KaleidoConfig;
use crate::variant::{Variant, VariantFilter};

/// Raw values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantOptions {
    /// Every `--variant` argument, in order.
    pub variants: Vec<String>,
    /// The `--variant-setup` argument.
    pub variant_setup: Option<String>,
}

/// One parametrized test instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub id: String,
    pub variant: Variant,
}

/// Resolved inputs for a single session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSession {
    variant_args: Vec<String>,
    setup_arg: Option<String>,
}

impl VariantSession {
    /// Resolves command-line options against configuration defaults.
    ///
    /// Non-empty `--variant` arguments replace the configured `variants`
    /// entirely; the same goes for the setup string.
    pub fn resolve(options: &VariantOptions, config: &KaleidoConfig) -> Self {
        let variant_args = if !options.variants.is_empty() {
            options.variants.clone()
        } else {
            config
                .variants
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect()
        };
        let setup_arg = non_empty(options.variant_setup.as_deref())
            .or_else(|| non_empty(config.variant_setup.as_deref()))
            .map(str::to_owned);

        tracing::debug!(?variant_args, ?setup_arg, "resolved variant session");
        Self {
            variant_args,
            setup_arg,
        }
    }

    pub fn variant_args(&self) -> &[String] {
        &self.variant_args
    }

    pub fn setup_arg(&self) -> Option<&str> {
        self.setup_arg.as_deref()
    }

    /// All variants of the session.
    pub fn variants(&self) -> Vec<Variant> {
        Variant::parse(&self.variant_args)
    }

    /// The setup string parsed as variants; empty without a setup string.
    pub fn setup(&self) -> Vec<Variant> {
        Variant::parse(self.setup_arg.as_deref())
    }

    /// One parameter per variant, identified by [`Variant::id`].
    pub fn parametrize(&self) -> Vec<Param> {
        self.variants()
            .into_iter()
            .map(|variant| Param {
                id: variant.id(),
                variant,
            })
            .collect()
    }

    pub fn filter(&self) -> VariantFilter {
        VariantFilter::new(self.variants())
    }

    /// The labelled fields of the report header.
    ///
    /// The variant arguments render as a quoted list (`['a:1', "it's"]`,
    /// backslashes doubled); a missing setup string renders empty.
    pub fn report_header_fields(&self) -> ReportHeader {
        let args: Vec<String> = self.variant_args.iter().map(|arg| quote_arg(arg)).collect();
        ReportHeader {
            variants: format!("[{}]", args.join(", ")),
            setup: self.setup_arg.clone().unwrap_or_default(),
        }
    }

    /// The one-line summary printed at the top of a test report.
    pub fn report_header(&self) -> String {
        self.report_header_fields().to_string()
    }
}

/// Report header values, kept apart from their labels so output can style
/// the labels without re-parsing the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub variants: String,
    pub setup: String,
}

impl ReportHeader {
    pub const VARIANTS_LABEL: &'static str = "Variants";
    pub const SETUP_LABEL: &'static str = "Variant-setup";
}

impl fmt::Display for ReportHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {}: {}",
            Self::VARIANTS_LABEL,
            self.variants,
            Self::SETUP_LABEL,
            self.setup
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Quotes `arg` the way a Python string repr does: single quotes unless the
/// text holds a `'` and no `"`, with backslashes, the chosen quote and control
/// characters escaped.
fn quote_arg(arg: &str) -> String {
    let quote = if arg.contains('\'') && !arg.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(arg.len() + 2);
    out.push(quote);
    for c in arg.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(variants: &[&str], setup: Option<&str>) -> VariantOptions {
        VariantOptions {
            variants: variants.iter().map(|s| s.to_string()).collect(),
            variant_setup: setup.map(str::to_owned),
        }
    }

    fn config(variants: Option<&str>, setup: Option<&str>) -> KaleidoConfig {
        KaleidoConfig {
            variants: variants.map(str::to_owned),
            variant_setup: setup.map(str::to_owned),
        }
    }

    #[test]
    fn command_line_wins_over_config() {
        let session = VariantSession::resolve(
            &options(&["a:1", "b:2"], Some("cli:setup")),
            &config(Some("c:3"), Some("cfg:setup")),
        );
        assert_eq!(session.variant_args(), ["a:1", "b:2"]);
        assert_eq!(session.setup_arg(), Some("cli:setup"));
    }

    #[test]
    fn config_fills_missing_options() {
        let session =
            VariantSession::resolve(&options(&[], None), &config(Some("c:3"), Some("cfg:setup")));
        assert_eq!(session.variant_args(), ["c:3"]);
        assert_eq!(session.setup_arg(), Some("cfg:setup"));

        let session =
            VariantSession::resolve(&options(&[], Some("")), &config(Some(""), Some("cfg:setup")));
        assert!(session.variant_args().is_empty());
        assert_eq!(session.setup_arg(), Some("cfg:setup"));
    }

    #[test]
    fn empty_session_has_nothing() {
        let session = VariantSession::resolve(&VariantOptions::default(), &KaleidoConfig::default());
        assert!(session.variants().is_empty());
        assert!(session.setup().is_empty());
        assert!(session.parametrize().is_empty());
        assert_eq!(session.report_header(), "Variants: [] | Variant-setup: ");
    }

    #[test]
    fn parametrize_uses_variant_ids() {
        let session = VariantSession::resolve(
            &options(&["a:1.0,1.1", "b:1.0,1.1"], None),
            &KaleidoConfig::default(),
        );
        let ids: Vec<String> = session.parametrize().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["a:b:1.0", "a:b:1.1"]);
    }

    #[test]
    fn setup_is_parsed_like_variants() {
        let session = VariantSession::resolve(
            &options(&[], Some(r"win:C\:\App,linux:/opt/app\,special")),
            &KaleidoConfig::default(),
        );
        let setup = session.setup();
        assert_eq!(setup.len(), 2);
        assert_eq!(setup[0].name(), r"C:\App");
        assert_eq!(setup[0].attributes(), ["win"]);
        assert_eq!(setup[1].name(), "/opt/app,special");
    }

    #[test]
    fn filter_sees_session_variants() {
        let session = VariantSession::resolve(
            &options(&["router:1.0,switch:2.0", "foo"], None),
            &KaleidoConfig::default(),
        );
        let filter = session.filter();
        assert_eq!(filter.all_variant_attributes(), ["router", "switch"]);
        assert_eq!(filter.by_attribute(None)[0].name(), "foo");
    }

    #[test]
    fn report_header_lists_raw_arguments() {
        let session = VariantSession::resolve(
            &options(&["foo,bar", "x:baz"], Some("dir:/tmp")),
            &KaleidoConfig::default(),
        );
        assert_eq!(
            session.report_header(),
            "Variants: ['foo,bar', 'x:baz'] | Variant-setup: dir:/tmp"
        );
    }

    #[test]
    fn report_header_quotes_like_a_python_list() {
        let session = VariantSession::resolve(
            &options(&[r"win:C\:\App", "it's"], None),
            &KaleidoConfig::default(),
        );
        assert_eq!(
            session.report_header(),
            r#"Variants: ['win:C\\:\\App', "it's"] | Variant-setup: "#
        );
    }

    #[test]
    fn quote_arg_escapes() {
        assert_eq!(quote_arg("plain"), "'plain'");
        assert_eq!(quote_arg(r"a\b"), r"'a\\b'");
        assert_eq!(quote_arg("it's"), r#""it's""#);
        assert_eq!(quote_arg(r#"both ' and ""#), r#"'both \' and "'"#);
        assert_eq!(quote_arg("tab\there\n"), r"'tab\there\n'");
        assert_eq!(quote_arg("bell\u{7}"), r"'bell\x07'");
        assert_eq!(quote_arg(""), "''");
    }

    #[test]
    fn report_header_fields_keep_labels_out_of_values() {
        let session = VariantSession::resolve(
            &options(&["x | y: z"], Some("dir: a | b")),
            &KaleidoConfig::default(),
        );
        let fields = session.report_header_fields();
        assert_eq!(fields.variants, "['x | y: z']");
        assert_eq!(fields.setup, "dir: a | b");
    }
}
