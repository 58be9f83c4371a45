//! Manifest adapter for MSBuild project files (`.csproj`, `.vbproj`).
//!
//! Only item `Include` attributes are read. Wildcards, conditions and imported
//! targets are passed through or ignored; evaluating MSBuild is out of scope.

use super::{ProjectError, ProjectFileManifest};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;

/// Item element collected when no other names are configured.
pub const DEFAULT_ITEM_NAME: &str = "Compile";

/// Reads `<Compile Include="..."/>` style items from an MSBuild descriptor.
#[derive(Debug, Clone)]
pub struct MsBuildManifest {
    item_names: Vec<String>,
}

impl MsBuildManifest {
    pub fn new() -> Self {
        Self {
            item_names: vec![DEFAULT_ITEM_NAME.to_string()],
        }
    }

    /// Collect the given item elements instead of `Compile`.
    pub fn with_item_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            item_names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Extract the `Include` values of the configured items from XML text.
    pub fn parse_content(
        &self,
        descriptor: &Path,
        content: &str,
    ) -> Result<Vec<String>, ProjectError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut files = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    let local = e.local_name();
                    if !self.item_names.iter().any(|n| n.as_bytes() == local.as_ref()) {
                        continue;
                    }
                    let include = e
                        .try_get_attribute("Include")
                        .map_err(|err| ProjectError::manifest(descriptor, err.to_string()))?;
                    if let Some(attr) = include {
                        let value = attr
                            .unescape_value()
                            .map_err(|err| ProjectError::manifest(descriptor, err.to_string()))?;
                        files.push(value.into_owned());
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(ProjectError::manifest(
                        descriptor,
                        format!("at position {}: {}", reader.error_position(), err),
                    ));
                }
            }
        }

        Ok(files)
    }
}

impl Default for MsBuildManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFileManifest for MsBuildManifest {
    fn list_files(&self, descriptor: &Path) -> Result<Vec<String>, ProjectError> {
        let content =
            std::fs::read_to_string(descriptor).map_err(|e| ProjectError::io(descriptor, e))?;
        self.parse_content(descriptor, &content)
    }
}
