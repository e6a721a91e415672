use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document flavour with its own separator hierarchy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Text,
    Markdown,
    Html,
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Go,
    Java,
    Cpp,
    Ruby,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" | "mdx" => Language::Markdown,
            "html" | "htm" => Language::Html,
            "rs" => Language::Rust,
            "py" | "pyw" => Language::Python,
            "js" | "mjs" | "cjs" | "jsx" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "go" => Language::Go,
            "java" => Language::Java,
            "c" | "h" | "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Language::Cpp,
            "rb" => Language::Ruby,
            _ => Language::Text,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Text)
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Text => "text",
            Language::Markdown => "markdown",
            Language::Html => "html",
            Language::Rust => "rust",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Ruby => "ruby",
        }
    }

    /// Separators from coarsest to finest, always ending with `""`
    pub fn separators(self) -> Vec<&'static str> {
        let structural: &[&'static str] = match self {
            Language::Text => &[". "],
            Language::Markdown => &[
                "\n# ",
                "\n## ",
                "\n### ",
                "\n#### ",
                "\n##### ",
                "\n###### ",
                "```\n\n",
                "\n\n***\n\n",
                "\n\n---\n\n",
                "\n\n___\n\n",
            ],
            Language::Html => &[
                "<body>", "<div>", "<p>", "<br>", "<li>", "<h1>", "<h2>", "<h3>", "<h4>", "<h5>",
                "<h6>", "<span>", "<table>", "<tr>", "<td>", "<th>", "<ul>", "<ol>", "<header>",
                "<footer>", "<nav>", "<head>", "<style>", "<script>", "<meta>", "<title>",
            ],
            Language::Rust => &[
                "\nfn ", "\nconst ", "\nlet ", "\nif ", "\nwhile ", "\nfor ", "\nloop ",
                "\nmatch ",
            ],
            Language::Python => &["\nclass ", "\ndef ", "\n\tdef "],
            Language::JavaScript | Language::TypeScript => &[
                "\nfunction ",
                "\nconst ",
                "\nlet ",
                "\nvar ",
                "\nclass ",
                "\nif ",
                "\nfor ",
                "\nwhile ",
                "\nswitch ",
                "\ncase ",
                "\ndefault ",
            ],
            Language::Go => &[
                "\nfunc ", "\nvar ", "\nconst ", "\ntype ", "\nif ", "\nfor ", "\nswitch ",
                "\ncase ",
            ],
            Language::Java => &[
                "\nclass ",
                "\npublic ",
                "\nprotected ",
                "\nprivate ",
                "\nstatic ",
                "\nif ",
                "\nfor ",
                "\nwhile ",
                "\nswitch ",
                "\ncase ",
            ],
            Language::Cpp => &[
                "\nclass ", "\nvoid ", "\nint ", "\nfloat ", "\ndouble ", "\nif ", "\nfor ",
                "\nwhile ", "\nswitch ", "\ncase ",
            ],
            Language::Ruby => &[
                "\ndef ", "\nclass ", "\nif ", "\nunless ", "\nwhile ", "\nfor ", "\ndo ",
                "\nbegin ", "\nrescue ",
            ],
        };

        let mut separators: Vec<&'static str> = Vec::with_capacity(structural.len() + 4);
        match self {
            // Prose separators come first; sentence breaks sit between lines and words.
            Language::Text => {
                separators.extend(["\n\n", "\n"]);
                separators.extend_from_slice(structural);
            }
            _ => {
                separators.extend_from_slice(structural);
                separators.extend(["\n\n", "\n"]);
            }
        }
        separators.extend([" ", ""]);
        separators
    }

    /// Owned separator list, ready for a splitter config
    pub fn separator_strings(self) -> Vec<String> {
        self.separators().into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("RS"), Language::Rust);
        assert_eq!(Language::from_extension("md"), Language::Markdown);
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("ts"), Language::TypeScript);
        assert_eq!(Language::from_extension("txt"), Language::Text);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("README.md"), Language::Markdown);
        assert_eq!(Language::from_path("src/main.py"), Language::Python);
        assert_eq!(Language::from_path("index.html"), Language::Html);
        assert_eq!(Language::from_path("no_extension"), Language::Text);
    }

    #[test]
    fn default_is_plain_text() {
        assert_eq!(Language::default(), Language::Text);
    }

    #[test]
    fn text_separators_match_default_hierarchy() {
        assert_eq!(Language::Text.separators(), vec!["\n\n", "\n", ". ", " ", ""]);
    }

    #[test]
    fn every_preset_ends_with_empty_separator() {
        let all = [
            Language::Text,
            Language::Markdown,
            Language::Html,
            Language::Rust,
            Language::Python,
            Language::JavaScript,
            Language::TypeScript,
            Language::Go,
            Language::Java,
            Language::Cpp,
            Language::Ruby,
        ];

        for language in all {
            let separators = language.separators();
            assert_eq!(separators.last(), Some(&""), "{}", language.as_str());
            assert_eq!(
                separators.iter().filter(|s| s.is_empty()).count(),
                1,
                "{}",
                language.as_str()
            );
        }
    }

    #[test]
    fn markdown_headings_precede_paragraphs() {
        let separators = Language::Markdown.separators();
        let heading = separators.iter().position(|s| *s == "\n## ").unwrap();
        let paragraph = separators.iter().position(|s| *s == "\n\n").unwrap();
        assert!(heading < paragraph);
    }
}
