//! Meme template catalog.
//!
//! The built-in catalog is a constant table materialised once per process.
//! Custom catalogs can be loaded from a TOML file with `[[templates]]` entries;
//! they go through the same id-uniqueness check as anything built with
//! [`Catalog::new`].

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// A meme image with its matching keywords and default caption lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier (e.g., "drake-hotline-bling")
    pub id: String,

    /// Display name (e.g., "Drake Pointing")
    pub name: String,

    /// Image reference, returned as-is and never loaded
    pub image: String,

    /// Keywords scored against the prompt
    pub keywords: Vec<String>,

    /// Caption lines used when no rule overrides them
    pub default_texts: Vec<String>,
}

/// Image path convention for templates that don't specify one.
pub fn default_image_path(id: &str) -> String {
    format!("assets/meme-templates/{id}.jpg")
}

/// Compile-time description of a built-in template.
struct BuiltinTemplate {
    id: &'static str,
    name: &'static str,
    keywords: &'static [&'static str],
    default_texts: &'static [&'static str],
}

const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        id: "matrix-morpheus",
        name: "Matrix Morpheus",
        keywords: &["what if", "told you", "morpheus", "matrix", "red pill", "blue pill"],
        default_texts: &["What if I told you", "This is AI generated"],
    },
    BuiltinTemplate {
        id: "distracted-boyfriend",
        name: "Distracted Boyfriend",
        keywords: &["distracted", "boyfriend", "girlfriend", "looking", "choice", "temptation"],
        default_texts: &["Me", "AI Memes", "Manual Memes"],
    },
    BuiltinTemplate {
        id: "drake-hotline-bling",
        name: "Drake Pointing",
        keywords: &["drake", "pointing", "no", "yes", "prefer", "choice", "better"],
        default_texts: &["Manual meme creation", "AI meme generation"],
    },
    BuiltinTemplate {
        id: "success-kid",
        name: "Success Kid",
        keywords: &["success", "kid", "fist", "victory", "win", "achievement", "happy"],
        default_texts: &["Successfully implemented", "AI meme generator"],
    },
    BuiltinTemplate {
        id: "disaster-girl",
        name: "Disaster Girl",
        keywords: &["disaster", "girl", "fire", "evil", "smiling", "chaos", "destruction"],
        default_texts: &["Me watching AI", "Replace human creativity"],
    },
    BuiltinTemplate {
        id: "this-is-fine",
        name: "This is Fine",
        keywords: &["fine", "fire", "dog", "everything", "okay", "chaos", "calm"],
        default_texts: &["This is fine", "Everything is under control"],
    },
    BuiltinTemplate {
        id: "nervous",
        name: "Nervous/Sweating",
        keywords: &["nervous", "sweating", "anxious", "worried", "scared", "frightened", "panic"],
        default_texts: &["When AI starts", "Making better memes than you"],
    },
    BuiltinTemplate {
        id: "hide-the-pain-harold",
        name: "Hide the Pain Harold",
        keywords: &["harold", "pain", "smile", "fake", "hiding", "uncomfortable", "awkward"],
        default_texts: &["When you realize AI", "Is better at memes than you"],
    },
    BuiltinTemplate {
        id: "two-buttons",
        name: "Two Buttons",
        keywords: &["buttons", "choice", "decision", "dilemma", "sweating", "difficult"],
        default_texts: &["Use manual mode", "Use AI mode", "Confused user"],
    },
    BuiltinTemplate {
        id: "change-my-mind",
        name: "Change My Mind",
        keywords: &["change", "mind", "opinion", "debate", "convince", "argument"],
        default_texts: &["AI memes are better", "Change my mind"],
    },
    BuiltinTemplate {
        id: "one-does-not-simply",
        name: "One Does Not Simply",
        keywords: &["one does not simply", "boromir", "lord of the rings", "simply", "difficult"],
        default_texts: &["One does not simply", "Create memes without AI"],
    },
    BuiltinTemplate {
        id: "i-dont-always",
        name: "Most Interesting Man",
        keywords: &["most interesting", "man", "dont always", "but when", "beer", "rarely"],
        default_texts: &["I don't always use AI", "But when I do, memes are better"],
    },
    BuiltinTemplate {
        id: "bad-luck-brian",
        name: "Bad Luck Brian",
        keywords: &["bad luck", "brian", "unlucky", "unfortunate", "fails", "disaster"],
        default_texts: &["Tries to make meme manually", "AI does it better in seconds"],
    },
    BuiltinTemplate {
        id: "laughing-leo",
        name: "Laughing Leonardo DiCaprio",
        keywords: &["laughing", "leonardo", "dicaprio", "funny", "hilarious", "lol"],
        default_texts: &["When AI generates", "The perfect meme"],
    },
];

impl BuiltinTemplate {
    fn to_template(&self) -> Template {
        Template {
            id: self.id.to_string(),
            name: self.name.to_string(),
            image: default_image_path(self.id),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            default_texts: self.default_texts.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// An ordered, id-unique collection of templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<Template>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and duplicate ids.
    pub fn new(templates: Vec<Template>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(templates.len());
        for (i, template) in templates.iter().enumerate() {
            if index.insert(template.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(template.id.clone()));
            }
        }

        Ok(Self { templates, index })
    }

    /// The built-in template table, constructed on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let templates: Vec<Template> =
                BUILTIN_TEMPLATES.iter().map(BuiltinTemplate::to_template).collect();
            let index = templates
                .iter()
                .enumerate()
                .map(|(i, t)| (t.id.clone(), i))
                .collect();
            Catalog { templates, index }
        })
    }

    /// Load a catalog from a TOML file of `[[templates]]` entries.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let templates = file.templates.into_iter().map(TemplateEntry::into_template).collect();
        let catalog = Self::new(templates)?;
        tracing::debug!("Loaded {} templates from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// All templates in catalog order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// On-disk catalog layout.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: Vec<TemplateEntry>,
}

#[derive(Deserialize)]
struct TemplateEntry {
    id: String,
    name: String,
    image: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    default_texts: Vec<String>,
}

impl TemplateEntry {
    fn into_template(self) -> Template {
        let image = self.image.unwrap_or_else(|| default_image_path(&self.id));
        Template {
            id: self.id,
            name: self.name,
            image,
            keywords: self.keywords,
            default_texts: self.default_texts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn template(id: &str) -> Template {
        Template {
            id: id.to_string(),
            name: id.to_string(),
            image: default_image_path(id),
            keywords: vec![],
            default_texts: vec![],
        }
    }

    #[test]
    fn test_builtin_has_fourteen_templates() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.templates()[0].id, "matrix-morpheus");
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let templates = Catalog::builtin().templates().to_vec();
        assert!(Catalog::new(templates).is_ok());
    }

    #[test]
    fn test_builtin_image_paths() {
        let drake = Catalog::builtin().get("drake-hotline-bling").unwrap();
        assert_eq!(drake.image, "assets/meme-templates/drake-hotline-bling.jpg");
        assert_eq!(drake.name, "Drake Pointing");
    }

    #[test]
    fn test_get_missing_id() {
        assert!(Catalog::builtin().get("grumpy-cat").is_none());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![template("a"), template("b"), template("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[templates]]
id = "grumpy-cat"
name = "Grumpy Cat"
keywords = ["grumpy", "cat", "no"]
default_texts = ["I had fun once", "It was awful"]

[[templates]]
id = "doge"
name = "Doge"
image = "https://example.com/doge.png"
keywords = ["wow", "such"]
"#
        )
        .unwrap();

        let catalog = Catalog::load_from(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let grumpy = catalog.get("grumpy-cat").unwrap();
        assert_eq!(grumpy.image, "assets/meme-templates/grumpy-cat.jpg");
        assert_eq!(grumpy.default_texts.len(), 2);

        let doge = catalog.get("doge").unwrap();
        assert_eq!(doge.image, "https://example.com/doge.png");
        assert!(doge.default_texts.is_empty());
    }

    #[test]
    fn test_load_from_rejects_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[templates]]
id = "doge"
name = "Doge"

[[templates]]
id = "doge"
name = "Doge Again"
"#
        )
        .unwrap();

        let err = Catalog::load_from(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Catalog::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
