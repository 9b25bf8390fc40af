//! Cancellation of in-flight requests when a view goes away.
//!
//! Every request a view starts runs through its [`TaskScope`]. Once the scope
//! is cancelled, pending requests are aborted and their results are never
//! applied, so a late response cannot write into a torn-down view.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::{AbortHandle, Abortable};

#[derive(Default)]
struct ScopeState {
    cancelled: bool,
    next_id: u64,
    pending: HashMap<u64, AbortHandle>,
}

/// Owner of the abort handles for one view's requests.
#[derive(Clone, Default)]
pub struct TaskScope {
    state: Rc<RefCell<ScopeState>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `future` under this scope.
    ///
    /// Returns `None` if the scope was cancelled before `future` completed.
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return None;
            }
            let id = state.next_id;
            state.next_id += 1;
            state.pending.insert(id, handle);
            id
        };

        let output = Abortable::new(future, registration).await.ok();
        self.state.borrow_mut().pending.remove(&id);
        output
    }

    /// Abort every pending request and refuse new ones.
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.cancelled = true;
        for (_, handle) in state.pending.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }
}

/// Task scope tied to the current component: cancelled when it unmounts.
pub fn use_task_scope() -> TaskScope {
    let scope = use_hook(TaskScope::new);
    let on_drop = scope.clone();
    use_drop(move || on_drop.cancel());
    scope
}
