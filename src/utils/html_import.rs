//! Netscape bookmark HTML import
//!
//! 解析浏览器导出的 `bookmarks.html`。文件夹取最内层的非标准 `<H3>`，
//! 浏览器自带的根文件夹（书签栏等）不作为文件夹使用。

use std::borrow::Cow;
use std::path::Path;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use tracing::{debug, info, warn};

use crate::errors::{MarksError, Result};
use crate::storage::Bookmark;

/// 无文件夹时使用的文件夹名
pub const IMPORT_FOLDER: &str = "Import";

const STANDARD_FOLDERS: [&str; 6] = [
    "bookmarks toolbar",
    "bookmark toolbar",
    "bookmarks bar",
    "bookmarks menu",
    "other bookmarks",
    "other favourites",
];

enum Capture {
    Folder(String),
    Link { href: String, text: String },
}

/// Read and parse an exported bookmarks file.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn import_bookmarks_file(path: &Path) -> Result<Vec<Bookmark>> {
    let bytes = std::fs::read(path)
        .map_err(|e| MarksError::import(format!("Failed to read {}: {}", path.display(), e)))?;
    let html = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = html {
        warn!("{} contains invalid UTF-8; affected characters were replaced", path.display());
    }
    let bookmarks = parse_bookmarks_html(&html);
    info!("Parsed {} bookmark candidates from {}", bookmarks.len(), path.display());
    Ok(bookmarks)
}

/// Returns candidate records in document order. Records are not validated;
/// an anchor without text yields an empty title.
pub fn parse_bookmarks_html(html: &str) -> Vec<Bookmark> {
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(BookmarkSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.bookmarks
}

/// Token sink that tracks the folder stack and collects anchors.
#[derive(Default)]
struct BookmarkSink {
    // None marks a standard root folder so that its </DL> pops the right level.
    folders: Vec<Option<String>>,
    capture: Option<Capture>,
    bookmarks: Vec<Bookmark>,
}

impl TokenSink for BookmarkSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => match self.capture.as_mut() {
                Some(Capture::Folder(buf)) | Some(Capture::Link { text: buf, .. }) => {
                    buf.push_str(&text)
                }
                None => {}
            },
            Token::TagToken(tag) => self.handle_tag(tag),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl BookmarkSink {
    fn handle_tag(&mut self, tag: Tag) {
        match (&*tag.name, tag.kind) {
            ("h3", TagKind::StartTag) => self.capture = Some(Capture::Folder(String::new())),
            ("h3", TagKind::EndTag) => {
                if let Some(Capture::Folder(raw)) = self.capture.take() {
                    let folder = clean_text(&raw);
                    if folder.is_empty() || is_standard_folder(&folder) {
                        debug!("Skipping standard folder '{}'", folder);
                        self.folders.push(None);
                    } else {
                        self.folders.push(Some(folder));
                    }
                }
            }
            ("dl", TagKind::EndTag) => {
                self.folders.pop();
            }
            ("a", TagKind::StartTag) => {
                self.capture = Some(Capture::Link {
                    href: href_of(&tag),
                    text: String::new(),
                });
            }
            ("a", TagKind::EndTag) => {
                if let Some(Capture::Link { href, text }) = self.capture.take() {
                    let folder = self
                        .folders
                        .iter()
                        .rev()
                        .find_map(|f| f.clone())
                        .unwrap_or_else(|| IMPORT_FOLDER.to_string());
                    self.bookmarks.push(Bookmark {
                        title: clean_text(&text),
                        url: href,
                        folder,
                        note: String::new(),
                    });
                }
            }
            _ => {}
        }
    }
}

fn is_standard_folder(name: &str) -> bool {
    let lower = name.to_lowercase();
    STANDARD_FOLDERS.contains(&lower.as_str())
}

/// Attribute values arrive with character references already decoded.
fn href_of(tag: &Tag) -> String {
    tag.attrs
        .iter()
        .find(|attr| &*attr.name.local == "href")
        .map(|attr| attr.value.trim().to_string())
        .unwrap_or_default()
}

fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
