//! Prop-friendly handles for the injected capabilities.
//!
//! Dioxus props must be `Clone + PartialEq`, but the form controller, phone
//! parser, and locale reader are trait objects. These newtypes wrap them in
//! shared pointers and compare by identity, so passing the same controller
//! to every component never forces a re-render on its own.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use fieldkit_core::phone::{CountryData, ValidationOutcome};
use fieldkit_core::{FormController, LocaleReader, PhoneParser};

/// Shared handle to the host application's form controller.
#[derive(Clone)]
pub struct FormHandle(Arc<dyn FormController + Send + Sync>);

impl FormHandle {
    pub fn new(controller: Arc<dyn FormController + Send + Sync>) -> Self {
        Self(controller)
    }

    pub fn controller(&self) -> &(dyn FormController + Send + Sync) {
        self.0.as_ref()
    }
}

impl std::ops::Deref for FormHandle {
    type Target = dyn FormController + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for FormHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Shared handle to one phone-parser instance.
///
/// The parser is single-owner by contract; the handle exists only so the
/// binder and the component's event handlers can reach the same instance.
#[derive(Clone)]
pub struct PhoneHandle(Rc<RefCell<dyn PhoneParser>>);

impl PhoneHandle {
    pub fn new(parser: impl PhoneParser + 'static) -> Self {
        Self(Rc::new(RefCell::new(parser)))
    }
}

impl PartialEq for PhoneHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PhoneParser for PhoneHandle {
    fn number(&self) -> String {
        self.0.borrow().number()
    }

    fn selected_country(&self) -> CountryData {
        self.0.borrow().selected_country()
    }

    fn set_number(&mut self, number: &str) {
        self.0.borrow_mut().set_number(number);
    }

    fn validation_outcome(&self) -> ValidationOutcome {
        self.0.borrow().validation_outcome()
    }

    fn release(&mut self) {
        self.0.borrow_mut().release();
    }
}

/// Shared handle to the locale/cookie reader used to seed the default
/// country.
#[derive(Clone)]
pub struct LocaleHandle(Rc<dyn LocaleReader>);

impl LocaleHandle {
    pub fn new(reader: impl LocaleReader + 'static) -> Self {
        Self(Rc::new(reader))
    }

    pub fn reader(&self) -> &dyn LocaleReader {
        self.0.as_ref()
    }
}

impl PartialEq for LocaleHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_core::MemoryForm;

    #[test]
    fn form_handles_compare_by_identity() {
        let a = FormHandle::new(Arc::new(MemoryForm::new()));
        let b = a.clone();
        let c = FormHandle::new(Arc::new(MemoryForm::new()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn form_handle_derefs_to_controller() {
        let form = FormHandle::new(Arc::new(MemoryForm::new()));
        form.set_value("x", "1");
        assert_eq!(form.value("x").as_deref(), Some("1"));
    }
}
