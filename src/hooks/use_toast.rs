// ============================================================================
// TOASTS - Transient success/error notifications
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Id source shared by every copy of a handle, so pushes made from the same
/// render snapshot still get distinct ids
#[derive(Debug, Clone, Default)]
pub struct ToastIds(Rc<Cell<u32>>);

impl ToastIds {
    pub fn allocate(&self) -> u32 {
        let id = self.0.get();
        self.0.set(id.wrapping_add(1));
        id
    }
}

impl PartialEq for ToastIds {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    list: UseReducerHandle<ToastList>,
    ids: ToastIds,
}

impl ToastHandle {
    pub fn toasts(&self) -> &[Toast] {
        &self.list.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.list.dispatch(ToastAction::Dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.ids.allocate();
        self.list.dispatch(ToastAction::Push(Toast { id, kind, message }));

        let list = self.list.clone();
        Timeout::new(CONFIG.toast_duration_ms, move || {
            list.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let ids = use_memo((), |_| ToastIds::default());
    let handle = ToastHandle {
        list,
        ids: (*ids).clone(),
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ToastHandle>>
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toast must be called inside ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<ToastList>, ids: &ToastIds, message: &str) -> (Rc<ToastList>, u32) {
        let id = ids.allocate();
        let list = list.reduce(ToastAction::Push(Toast {
            id,
            kind: ToastKind::Error,
            message: message.to_string(),
        }));
        (list, id)
    }

    #[test]
    fn copies_of_one_handle_allocate_distinct_ids() {
        let ids = ToastIds::default();
        let snapshot = ids.clone();

        assert_eq!(snapshot.allocate(), 0);
        assert_eq!(snapshot.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids, snapshot);
        assert_ne!(ids, ToastIds::default());
    }

    #[test]
    fn two_pushes_from_one_snapshot_are_both_dismissed() {
        let ids = ToastIds::default();
        let list = Rc::new(ToastList::default());

        let (list, first) = push(list, &ids, "pickup points failed");
        let (list, second) = push(list, &ids, "machines failed");
        assert_ne!(first, second);
        assert_eq!(list.toasts.len(), 2);

        // Both timeouts fire
        let list = list.reduce(ToastAction::Dismiss(first));
        let list = list.reduce(ToastAction::Dismiss(second));
        assert!(list.toasts.is_empty());
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let ids = ToastIds::default();
        let (list, first) = push(Rc::new(ToastList::default()), &ids, "one");
        let (list, _) = push(list, &ids, "two");
        let list = list.reduce(ToastAction::Dismiss(first));

        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].message, "two");

        // Already gone
        let list = list.reduce(ToastAction::Dismiss(first));
        assert_eq!(list.toasts.len(), 1);
    }
}
