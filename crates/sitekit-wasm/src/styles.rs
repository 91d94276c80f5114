// File: src/styles.rs
// Purpose: Keyframes and transitions the enhancements rely on

use wasm_bindgen::prelude::*;
use web_sys::Document;

const STYLE_ID: &str = "sitekit-styles";

const STYLESHEET: &str = r#"
@keyframes ripple-animation {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

.is-visible {
  opacity: 1 !important;
  transform: translateY(0) !important;
}

.navbar-collapse {
  transition: max-height 0.4s cubic-bezier(0.4, 0, 0.2, 1);
}

@media (max-width: 1023px) {
  .navbar-collapse {
    height: calc(100vh - var(--header-h));
    max-height: 0;
    overflow-y: auto;
  }

  .navbar-collapse.show {
    max-height: calc(100vh - var(--header-h));
  }
}

.btn, .c-button, .card, .c-card {
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

.btn:hover, .c-button:hover {
  transform: translateY(-2px) scale(1.02);
}

.btn:active, .c-button:active {
  transform: translateY(0) scale(0.98);
}

.card:hover, .c-card:hover {
  transform: translateY(-8px);
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.15);
}

.nav-link {
  position: relative;
  overflow: hidden;
}

.form-control:focus, .c-input:focus {
  transform: scale(1.01);
}

.spinner-border-sm {
  width: 1rem;
  height: 1rem;
  display: inline-block;
  border: 0.15em solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spinner-border 0.75s linear infinite;
}

@keyframes spinner-border {
  to { transform: rotate(360deg); }
}

#notification-container .alert {
  margin-bottom: 10px;
  box-shadow: 0 4px 12px rgba(0,0,0,0.15);
  animation: slideIn 0.3s ease-out;
}

@keyframes slideIn {
  from {
    transform: translateX(100%);
    opacity: 0;
  }
  to {
    transform: translateX(0);
    opacity: 1;
  }
}

.accordion-button {
  transition: all 0.3s ease-in-out;
}

.accordion-button:not(.collapsed) {
  box-shadow: inset 0 -1px 0 rgba(0,0,0,0.125);
}

img {
  transition: transform 0.3s ease-in-out, opacity 0.5s ease-in-out;
}

img:hover {
  transform: scale(1.02);
}
"#;

/// Append the stylesheet to `<head>` unless it is already there.
pub fn inject(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };

    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}
