//! Application state definitions

use super::forms::OrderForm;

/// Path of the home view
pub const HOME_PATH: &str = "/";

/// Path of the order view
pub const ORDER_PATH: &str = "/order";

/// Views reachable through the navigation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Order,
}

impl View {
    /// All routed views, in link order
    pub const ALL: [View; 2] = [View::Home, View::Order];

    /// Resolve a route path; unmatched paths have no view
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            HOME_PATH => Some(View::Home),
            ORDER_PATH => Some(View::Order),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Home => HOME_PATH,
            View::Order => ORDER_PATH,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Order => "Order",
        }
    }
}

/// A mounted order form together with its mount generation
#[derive(Debug, Clone)]
pub struct MountedForm {
    pub mount_id: u64,
    pub form: OrderForm,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current route path
    pub current_path: String,
    /// The order form, present only while the order view is mounted
    pub order: Option<MountedForm>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    next_mount_id: u64,
}

impl AppState {
    pub fn new(start_path: &str) -> Self {
        let mut state = Self {
            current_path: String::new(),
            order: None,
            status_message: None,
            next_mount_id: 0,
        };
        state.set_path(start_path);
        state
    }

    /// The view for the current path, if any route matches
    pub fn current_view(&self) -> Option<View> {
        View::from_path(&self.current_path)
    }

    /// Change route. Entering the order view mounts a fresh form; leaving it
    /// drops the form.
    pub fn set_path(&mut self, path: &str) {
        let was_order = matches!(self.current_view(), Some(View::Order));
        self.current_path = path.to_string();
        match self.current_view() {
            Some(View::Order) if was_order => {}
            Some(View::Order) => {
                self.next_mount_id += 1;
                self.order = Some(MountedForm {
                    mount_id: self.next_mount_id,
                    form: OrderForm::new(),
                });
            }
            _ => self.order = None,
        }
    }

    pub fn order_form(&self) -> Option<&OrderForm> {
        self.order.as_ref().map(|m| &m.form)
    }

    pub fn order_form_mut(&mut self) -> Option<&mut OrderForm> {
        self.order.as_mut().map(|m| &mut m.form)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}
