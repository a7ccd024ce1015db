//! Leptos FileDrop Utilities
//!
//! File drag-and-drop for Leptos using native `DragEvent`s.
//! Counts nested enter/leave events so hovering a child element does not
//! flicker the highlight.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, DragEvent, Event, File, FileList, HtmlInputElement};

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    pub hovering_read: ReadSignal<bool>,
    pub hovering_write: WriteSignal<bool>,
    /// Pending dragenter events not yet matched by a dragleave
    pub depth_read: ReadSignal<u32>,
    pub depth_write: WriteSignal<u32>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (hovering_read, hovering_write) = signal(false);
    let (depth_read, depth_write) = signal(0u32);
    FileDropSignals {
        hovering_read,
        hovering_write,
        depth_read,
        depth_write,
    }
}

/// Clear hover state
pub fn end_hover(fd: &FileDropSignals) {
    fd.depth_write.set(0);
    fd.hovering_write.set(false);
}

pub fn make_on_dragenter(fd: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        fd.depth_write.update(|depth| *depth += 1);
        fd.hovering_write.set(true);
    }
}

/// Must cancel dragover, otherwise the browser never fires `drop`
pub fn make_on_dragover() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("copy");
        }
    }
}

pub fn make_on_dragleave(fd: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        let depth = fd.depth_read.get_untracked().saturating_sub(1);
        fd.depth_write.set(depth);
        if depth == 0 {
            fd.hovering_write.set(false);
        }
    }
}

/// Create drop handler; `on_file` receives the first file matching `accept`
pub fn make_on_drop<F>(fd: FileDropSignals, accept: &'static str, on_file: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(File) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        end_hover(&fd);

        let files = ev.data_transfer().and_then(|transfer| transfer.files());
        match files.and_then(|files| first_accepted(&files, accept)) {
            Some(file) => on_file(file),
            None => log::warn!("Dropped content has no file matching '{}'", accept),
        }
    }
}

/// Create `change` handler for a hidden `<input type="file">`
pub fn make_on_input_change<F>(accept: &'static str, on_file: F) -> impl Fn(Event) + Clone + 'static
where
    F: Fn(File) + Clone + 'static,
{
    move |ev: Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| first_accepted(&files, accept)) {
            on_file(file);
        }
        // Allow picking the same file again
        input.set_value("");
    }
}

fn first_accepted(files: &FileList, accept: &str) -> Option<File> {
    (0..files.length())
        .filter_map(|index| files.get(index))
        .find(|file| accepts(&file.type_(), &file.name(), accept))
}

/// Match a file against an HTML `accept` list (`image/*`, `.png`, `application/pdf`)
pub fn accepts(mime: &str, file_name: &str, accept: &str) -> bool {
    let mime = mime.to_ascii_lowercase();
    let file_name = file_name.to_ascii_lowercase();
    let mut patterns = accept
        .split(',')
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .peekable();

    if patterns.peek().is_none() {
        return true;
    }
    patterns.any(|pattern| {
        if pattern == "*" || pattern == "*/*" {
            true
        } else if pattern.starts_with('.') {
            file_name.ends_with(&pattern)
        } else if let Some(family) = pattern.strip_suffix("/*") {
            mime.split('/').next() == Some(family) && mime.contains('/')
        } else {
            mime == pattern
        }
    })
}

/// `blob:` URL for previewing a file, revoked on drop
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(blob: &Blob) -> Option<Self> {
        web_sys::Url::create_object_url_with_blob(blob).ok().map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_mime_family() {
        assert!(accepts("image/png", "photo.png", "image/*"));
        assert!(accepts("IMAGE/JPEG", "photo.JPG", "image/*"));
        assert!(!accepts("application/pdf", "doc.pdf", "image/*"));
        assert!(!accepts("", "unknown", "image/*"));
    }

    #[test]
    fn test_accepts_extension_and_exact() {
        assert!(accepts("", "scan.PNG", ".png"));
        assert!(accepts("application/pdf", "doc.pdf", "image/*, application/pdf"));
        assert!(!accepts("text/plain", "notes.txt", ".png,.jpg"));
    }

    #[test]
    fn test_accepts_everything_when_empty() {
        assert!(accepts("text/plain", "notes.txt", ""));
        assert!(accepts("text/plain", "notes.txt", " , "));
        assert!(accepts("text/plain", "notes.txt", "*/*"));
    }
}
