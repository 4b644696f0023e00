/// Which page-image archive an item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageArchiveKind {
    Jp2,
    Images,
}

/// The page-image ZIP inside an archive item, resolved from its file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArchive {
    pub zip_name: String,
    pub base_name: String,
    pub kind: PageArchiveKind,
}

impl PageArchive {
    /// Pick the page-image ZIP from an item's file names: every `_jp2.zip`
    /// is preferred over any `_images.zip`.
    pub fn select(file_names: &[String]) -> Option<Self> {
        for name in file_names {
            if let Some(base) = name.strip_suffix("_jp2.zip") {
                return Some(Self {
                    zip_name: name.clone(),
                    base_name: base.to_string(),
                    kind: PageArchiveKind::Jp2,
                });
            }
        }
        for name in file_names {
            if let Some(base) = name.strip_suffix("_images.zip") {
                return Some(Self {
                    zip_name: name.clone(),
                    base_name: base.to_string(),
                    kind: PageArchiveKind::Images,
                });
            }
        }
        None
    }

    /// URL of the front page (page 0000) rendered as a JPG preview.
    ///
    /// The archive serves files inside a ZIP when the member path is
    /// URL-encoded into the download path with an `&ext=jpg` conversion
    /// suffix.
    pub fn preview_url(&self, base_url: &str, identifier: &str) -> String {
        let member = match self.kind {
            PageArchiveKind::Jp2 => format!(
                "{base}_jp2%2F{base}_0000.jp2&ext=jpg",
                base = self.base_name
            ),
            PageArchiveKind::Images => format!(
                "{base}_images%2F{base}_0000.tif&ext=jpg",
                base = self.base_name
            ),
        };
        format!(
            "{}/download/{}/{}/{}",
            base_url, identifier, self.zip_name, member
        )
    }
}
