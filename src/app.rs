//! Application state and core logic

use crate::config::TuiConfig;
use crate::order::{OrderClient, OrderClientError, OrderService};
use crate::state::{
    next_size, prev_size, AppState, FieldChange, FormFocus, OrderForm, SubmitOutcome, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Capacity of the submission result channel
const SUBMISSION_CHANNEL_CAPACITY: usize = 32;

/// A resolved submission, tagged with the form mount it belongs to
#[derive(Debug)]
pub struct SubmissionResult {
    pub mount_id: u64,
    pub outcome: SubmitOutcome,
}

/// Hand a result back to the UI loop; false when the loop has gone away
async fn deliver(tx: &mpsc::Sender<SubmissionResult>, result: SubmissionResult) -> bool {
    let mount_id = result.mount_id;
    if tx.send(result).await.is_err() {
        tracing::debug!("Dropping submission result for form {mount_id}: UI loop has exited");
        return false;
    }
    true
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Endpoint orders are posted to, shown in the status bar
    pub endpoint: String,
    /// Order service used by submission tasks
    orders: Arc<dyn OrderService>,
    submissions_tx: mpsc::Sender<SubmissionResult>,
    submissions_rx: mpsc::Receiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured order service
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let endpoint = config.endpoint();
        let client = OrderClient::new(endpoint.clone(), config.request_timeout())?;
        tracing::info!("Posting orders to {}", client.endpoint());

        Ok(Self::with_service(
            Arc::new(client),
            endpoint,
            config.start_path(),
        ))
    }

    /// Create an App over any order service
    pub fn with_service(
        orders: Arc<dyn OrderService>,
        endpoint: impl Into<String>,
        start_path: &str,
    ) -> Self {
        let (submissions_tx, submissions_rx) = mpsc::channel(SUBMISSION_CHANNEL_CAPACITY);

        Self {
            state: AppState::new(start_path),
            endpoint: endpoint.into(),
            orders,
            submissions_tx,
            submissions_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a routed view
    pub fn navigate(&mut self, view: View) {
        self.state.status_message = None;
        self.state.set_path(view.path());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Navigation links work from every view
        match key.code {
            KeyCode::F(1) => {
                self.navigate(View::Home);
                return Ok(());
            }
            KeyCode::F(2) => {
                self.navigate(View::Order);
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view() {
            Some(View::Home) => self.handle_home_key(key),
            Some(View::Order) => self.handle_order_key(key),
            None => self.handle_unrouted_key(key),
        }

        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('o') | KeyCode::Enter => self.navigate(View::Order),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_unrouted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate(View::Home),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the Order view
    fn handle_order_key(&mut self, key: KeyEvent) {
        let is_submit_shortcut = matches!(key.code, KeyCode::Char('s'))
            && (key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
                || key.modifiers.contains(KeyModifiers::CONTROL));

        if is_submit_shortcut {
            self.submit_order();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.navigate(View::Home);
                return;
            }
            KeyCode::Tab => {
                if let Some(form) = self.state.order_form_mut() {
                    form.focus = form.focus.next();
                }
                return;
            }
            KeyCode::BackTab => {
                if let Some(form) = self.state.order_form_mut() {
                    form.focus = form.focus.prev();
                }
                return;
            }
            _ => {}
        }

        let Some(focus) = self.state.order_form().map(|f| f.focus) else {
            return;
        };

        match focus {
            FormFocus::FullName => self.handle_full_name_key(key),
            FormFocus::Size => self.handle_size_key(key),
            FormFocus::Toppings => self.handle_toppings_key(key),
            FormFocus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit_order();
                }
            }
        }
    }

    fn handle_full_name_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.order_form_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = form.values().full_name.clone();
                value.push(c);
                form.on_field_change(FieldChange::FullName(value));
            }
            KeyCode::Backspace => {
                let mut value = form.values().full_name.clone();
                if value.pop().is_some() {
                    form.on_field_change(FieldChange::FullName(value));
                }
            }
            KeyCode::Enter => form.focus = form.focus.next(),
            _ => {}
        }
    }

    fn handle_size_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.order_form_mut() else {
            return;
        };
        let current = form.values().size.clone();

        let selected = match key.code {
            KeyCode::Right | KeyCode::Char(' ') => next_size(&current),
            KeyCode::Left => prev_size(&current),
            KeyCode::Char('s') | KeyCode::Char('S') => "S",
            KeyCode::Char('m') | KeyCode::Char('M') => "M",
            KeyCode::Char('l') | KeyCode::Char('L') => "L",
            KeyCode::Backspace | KeyCode::Delete => "",
            KeyCode::Enter => {
                form.focus = form.focus.next();
                return;
            }
            _ => return,
        };

        form.on_field_change(FieldChange::Size(selected.to_string()));
    }

    fn handle_toppings_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.order_form_mut() else {
            return;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => form.move_topping_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => form.move_topping_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => form.toggle_topping_at_cursor(),
            _ => {}
        }
    }

    /// Send the current form to the order service without waiting for it.
    ///
    /// Only the submit gate guards this; a second submit while one is in
    /// flight sends a second request.
    pub fn submit_order(&mut self) {
        let Some(mounted) = self.state.order.as_mut() else {
            return;
        };

        if !mounted.form.submit_enabled() {
            self.state.status_message = Some("Complete the form before submitting".to_string());
            return;
        }

        let mount_id = mounted.mount_id;
        let request = mounted.form.submit();
        tracing::debug!("Submitting order {request:?}");
        self.state.status_message = None;

        let orders = Arc::clone(&self.orders);
        let tx = self.submissions_tx.clone();
        tokio::spawn(async move {
            let outcome = match orders.place_order(&request).await {
                Ok(reply) => {
                    tracing::info!("Order placed: {}", reply.message);
                    SubmitOutcome::Placed {
                        message: reply.message,
                    }
                }
                Err(err) => {
                    if let OrderClientError::MalformedResponse { .. } = err {
                        tracing::error!("Order service broke protocol: {err}");
                    } else {
                        tracing::warn!("Order failed: {err}");
                    }
                    SubmitOutcome::Failed {
                        message: err.to_string(),
                    }
                }
            };

            deliver(&tx, SubmissionResult { mount_id, outcome }).await;
        });
    }

    /// Apply every submission result that has arrived; returns how many
    pub fn drain_submissions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.submissions_rx.try_recv() {
            self.apply_submission(result);
            applied += 1;
        }
        applied
    }

    fn apply_submission(&mut self, result: SubmissionResult) {
        match self.state.order.as_mut() {
            Some(mounted) if mounted.mount_id == result.mount_id => {
                mounted.form.complete_submission(result.outcome);
            }
            _ => {
                tracing::debug!(
                    "Discarding submission result for unmounted form {}",
                    result.mount_id
                );
            }
        }
    }

    /// The mounted order form, if the order view is active
    pub fn order_form(&self) -> Option<&OrderForm> {
        self.state.order_form()
    }

    /// Number of submissions awaiting a response
    pub fn in_flight(&self) -> usize {
        self.order_form().map(|f| f.in_flight).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{MockOrderService, OrderResponse};
    use crate::state::{OrderRequest, OrderValues, ORDER_PATH};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(mock: MockOrderService, start_path: &str) -> App {
        App::with_service(Arc::new(mock), "http://localhost:9009/api/order", start_path)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill the form through the keyboard: name, size, then toppings by index
    fn fill_form(app: &mut App, name: &str, size: char, topping_indices: &[usize]) {
        type_text(app, name);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char(size));
        press(app, KeyCode::Tab);
        let mut cursor = 0;
        for &idx in topping_indices {
            while cursor < idx {
                press(app, KeyCode::Down);
                cursor += 1;
            }
            press(app, KeyCode::Char(' '));
        }
        press(app, KeyCode::Tab);
    }

    /// Wait for the next submission task to report and apply it
    async fn settle(app: &mut App) {
        let result = app.submissions_rx.recv().await.unwrap();
        app.apply_submission(result);
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            let app = app_with(MockOrderService::new(), "/");
            assert!(!app.should_quit());
        }

        #[test]
        fn test_home_q_quits() {
            let mut app = app_with(MockOrderService::new(), "/");
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_home_o_opens_order_form() {
            let mut app = app_with(MockOrderService::new(), "/");
            press(&mut app, KeyCode::Char('o'));
            assert_eq!(app.state.current_view(), Some(View::Order));
            assert!(app.order_form().is_some());
        }

        #[test]
        fn test_function_keys_switch_views() {
            let mut app = app_with(MockOrderService::new(), "/");
            press(&mut app, KeyCode::F(2));
            assert_eq!(app.state.current_view(), Some(View::Order));
            press(&mut app, KeyCode::F(1));
            assert_eq!(app.state.current_view(), Some(View::Home));
            assert!(app.order_form().is_none());
        }

        #[test]
        fn test_escape_leaves_order_form() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view(), Some(View::Home));
        }

        #[test]
        fn test_q_types_into_name_on_order_form() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            press(&mut app, KeyCode::Char('q'));
            assert!(!app.should_quit());
            assert_eq!(app.order_form().unwrap().values().full_name, "q");
        }

        #[test]
        fn test_unrouted_path_escape_goes_home() {
            let mut app = app_with(MockOrderService::new(), "/missing");
            assert!(app.state.current_view().is_none());
            press(&mut app, KeyCode::Char('o'));
            assert!(app.state.current_view().is_none());
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view(), Some(View::Home));
        }
    }

    mod form_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_short_name_shows_error() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            type_text(&mut app, "Al");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char('m'));

            let form = app.order_form().unwrap();
            assert_eq!(
                form.errors().full_name.map(|e| e.to_string()),
                Some("full name must be at least 3 characters".to_string())
            );
            assert!(!form.submit_enabled());
        }

        #[test]
        fn test_backspace_edits_name() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            type_text(&mut app, "Alicex");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.order_form().unwrap().values().full_name, "Alice");
        }

        #[test]
        fn test_backspace_on_empty_name_keeps_errors_untouched() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            press(&mut app, KeyCode::Backspace);
            assert!(app.order_form().unwrap().errors().is_empty());
        }

        #[test]
        fn test_size_keys_select_and_cycle() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.order_form().unwrap().values().size, "S");
            press(&mut app, KeyCode::Char('l'));
            assert_eq!(app.order_form().unwrap().values().size, "L");
            press(&mut app, KeyCode::Right);
            assert_eq!(app.order_form().unwrap().values().size, "");
            assert!(app.order_form().unwrap().errors().size.is_some());
            press(&mut app, KeyCode::Left);
            assert_eq!(app.order_form().unwrap().values().size, "L");
            assert!(app.order_form().unwrap().errors().size.is_none());
        }

        #[test]
        fn test_topping_keys_toggle() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            press(&mut app, KeyCode::BackTab);
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.order_form().unwrap().focus, FormFocus::Toppings);

            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Char(' '));
            assert!(app.order_form().unwrap().values().toppings.contains("3"));
            press(&mut app, KeyCode::Enter);
            assert!(app.order_form().unwrap().values().toppings.is_empty());
        }

        #[test]
        fn test_gate_opens_when_form_is_valid() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            fill_form(&mut app, "Alice", 'm', &[]);
            let form = app.order_form().unwrap();
            assert!(form.submit_enabled());
            assert_eq!(form.focus, FormFocus::Submit);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        fn placed(mount_id: u64) -> SubmissionResult {
            SubmissionResult {
                mount_id,
                outcome: SubmitOutcome::Placed {
                    message: "Order placed".into(),
                },
            }
        }

        #[tokio::test]
        async fn test_deliver_reaches_open_receiver() {
            let (tx, mut rx) = mpsc::channel(1);
            assert!(deliver(&tx, placed(3)).await);
            assert_eq!(rx.recv().await.map(|r| r.mount_id), Some(3));
        }

        #[tokio::test]
        async fn test_deliver_after_receiver_closed_reports_drop() {
            let (tx, rx) = mpsc::channel(1);
            drop(rx);
            assert!(!deliver(&tx, placed(3)).await);
        }

        #[tokio::test]
        async fn test_closed_gate_sends_nothing() {
            let mut mock = MockOrderService::new();
            mock.expect_place_order().times(0);
            let mut app = app_with(mock, ORDER_PATH);

            type_text(&mut app, "Al");
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.in_flight(), 0);
            assert!(app.state.status_message.is_some());
        }

        #[tokio::test]
        async fn test_successful_order_shows_message_and_resets() {
            let mut mock = MockOrderService::new();
            mock.expect_place_order()
                .withf(|order: &OrderRequest| {
                    order
                        == &OrderRequest {
                            full_name: "Alice".into(),
                            size: "M".into(),
                            toppings: vec!["1".into(), "3".into()],
                        }
                })
                .times(1)
                .returning(|_| {
                    Ok(OrderResponse {
                        message: "Order placed".into(),
                    })
                });
            let mut app = app_with(mock, ORDER_PATH);

            fill_form(&mut app, "Alice", 'm', &[0, 2]);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.in_flight(), 1);

            settle(&mut app).await;

            let form = app.order_form().unwrap();
            assert_eq!(form.status().success(), Some("Order placed"));
            assert!(form.status().failure().is_none());
            assert_eq!(form.values(), &OrderValues::default());
            assert!(!form.submit_enabled());
            assert_eq!(app.in_flight(), 0);
        }

        #[tokio::test]
        async fn test_failed_order_shows_message_and_keeps_values() {
            let mut mock = MockOrderService::new();
            mock.expect_place_order().times(1).returning(|_| {
                Err(OrderClientError::Rejected {
                    status: 422,
                    message: "Out of stock".into(),
                })
            });
            let mut app = app_with(mock, ORDER_PATH);

            fill_form(&mut app, "Alice", 'm', &[1]);
            let before = app.order_form().unwrap().values().clone();
            app.handle_key(ctrl('s')).unwrap();
            settle(&mut app).await;

            let form = app.order_form().unwrap();
            assert_eq!(form.status().failure(), Some("Out of stock"));
            assert!(form.status().success().is_none());
            assert_eq!(form.values(), &before);
        }

        #[tokio::test]
        async fn test_malformed_reply_is_shown_as_failure() {
            let mut mock = MockOrderService::new();
            mock.expect_place_order().times(1).returning(|_| {
                Err(OrderClientError::MalformedResponse {
                    status: 500,
                    body: "Internal Server Error".into(),
                })
            });
            let mut app = app_with(mock, ORDER_PATH);

            fill_form(&mut app, "Alice", 's', &[]);
            app.submit_order();
            settle(&mut app).await;

            let failure = app.order_form().unwrap().status().failure().unwrap();
            assert!(failure.contains("Internal Server Error"));
        }

        #[tokio::test]
        async fn test_overlapping_submits_each_send() {
            let mut mock = MockOrderService::new();
            mock.expect_place_order().times(2).returning(|_| {
                Ok(OrderResponse {
                    message: "Order placed".into(),
                })
            });
            let mut app = app_with(mock, ORDER_PATH);

            fill_form(&mut app, "Alice", 'l', &[]);
            app.submit_order();
            app.submit_order();
            assert_eq!(app.in_flight(), 2);

            settle(&mut app).await;
            settle(&mut app).await;
            assert_eq!(app.in_flight(), 0);
        }

        #[tokio::test]
        async fn test_result_for_unmounted_form_is_discarded() {
            let mut mock = MockOrderService::new();
            mock.expect_place_order().times(1).returning(|_| {
                Ok(OrderResponse {
                    message: "Order placed".into(),
                })
            });
            let mut app = app_with(mock, ORDER_PATH);

            fill_form(&mut app, "Alice", 'm', &[]);
            app.submit_order();
            press(&mut app, KeyCode::Esc);
            press(&mut app, KeyCode::F(2));
            type_text(&mut app, "Bob");

            settle(&mut app).await;

            let form = app.order_form().unwrap();
            assert!(form.status().success().is_none());
            assert_eq!(form.values().full_name, "Bob");
        }

        #[tokio::test]
        async fn test_drain_applies_arrived_results() {
            let mut app = app_with(MockOrderService::new(), ORDER_PATH);
            let mount_id = app.state.order.as_ref().unwrap().mount_id;
            app.submissions_tx
                .send(SubmissionResult {
                    mount_id,
                    outcome: SubmitOutcome::Failed {
                        message: "Out of stock".into(),
                    },
                })
                .await
                .unwrap();

            assert_eq!(app.drain_submissions(), 1);
            assert_eq!(app.drain_submissions(), 0);
            assert_eq!(
                app.order_form().unwrap().status().failure(),
                Some("Out of stock")
            );
        }
    }
}
