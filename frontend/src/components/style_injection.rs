use web_sys::Document;

/// Somewhere a `<style>` block can live, looked up by element id.
pub trait StyleHost {
    fn has_style(&self, id: &str) -> bool;
    fn append_style(&self, id: &str, css: &str) -> bool;
}

impl StyleHost for Document {
    fn has_style(&self, id: &str) -> bool {
        self.get_element_by_id(id).is_some()
    }

    fn append_style(&self, id: &str, css: &str) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        let Ok(style) = self.create_element("style") else {
            return false;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).is_ok()
    }
}

/// Adds the stylesheet once per document. Returns true only for the call
/// that actually inserted it.
pub fn ensure_style<H: StyleHost + ?Sized>(host: &H, id: &str, css: &str) -> bool {
    if host.has_style(id) {
        return false;
    }
    let inserted = host.append_style(id, css);
    if inserted {
        log::debug!("Injected global stylesheet {}", id);
    }
    inserted
}

/// `ensure_style` against the live document.
pub fn ensure_document_style(id: &str, css: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|document| ensure_style(&document, id, css))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHead {
        styles: RefCell<Vec<(String, String)>>,
    }

    impl StyleHost for FakeHead {
        fn has_style(&self, id: &str) -> bool {
            self.styles.borrow().iter().any(|(existing, _)| existing == id)
        }

        fn append_style(&self, id: &str, css: &str) -> bool {
            self.styles.borrow_mut().push((id.to_string(), css.to_string()));
            true
        }
    }

    #[test]
    fn second_call_is_a_no_op() {
        let head = FakeHead::default();
        assert!(ensure_style(&head, "shapes", ".a {}"));
        assert!(!ensure_style(&head, "shapes", ".a {}"));
        assert_eq!(head.styles.borrow().len(), 1);
    }

    #[test]
    fn first_css_wins() {
        let head = FakeHead::default();
        ensure_style(&head, "shapes", ".first {}");
        ensure_style(&head, "shapes", ".second {}");
        assert_eq!(head.styles.borrow()[0].1, ".first {}");
    }

    #[test]
    fn distinct_ids_each_get_a_block() {
        let head = FakeHead::default();
        assert!(ensure_style(&head, "shapes", ""));
        assert!(ensure_style(&head, "cards", ""));
        assert_eq!(head.styles.borrow().len(), 2);
    }
}
