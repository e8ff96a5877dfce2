use crate::io::store::TodoStore;
use crate::model::task::{Filter, Task};

/// Owner of the in-memory task collection and the active filter.
///
/// Mutations are total: invalid input (empty text, unknown id) is a silent
/// no-op, never an error. Every mutation that changes the collection writes
/// a full snapshot through the store, but only once the initial load has
/// completed — the pre-load empty state must never clobber stored data.
pub struct TodoList {
    tasks: Vec<Task>,
    filter: Filter,
    initialized: bool,
    store: Box<dyn TodoStore>,
}

impl TodoList {
    /// Load-then-enable-writes in one step. The usual entry point.
    pub fn open(store: Box<dyn TodoStore>) -> TodoList {
        let mut list = TodoList::with_store(store);
        list.init();
        list
    }

    /// An uninitialized list: mutations work in memory but nothing is
    /// persisted until `init` runs.
    pub fn with_store(store: Box<dyn TodoStore>) -> TodoList {
        TodoList {
            tasks: Vec::new(),
            filter: Filter::All,
            initialized: false,
            store,
        }
    }

    /// One-time startup load. Replaces the in-memory collection with the
    /// stored one and arms save-on-change.
    pub fn init(&mut self) {
        self.tasks = self.store.load();
        self.initialized = true;
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new task. Whitespace-only text is rejected without creating
    /// anything; the caller gets `None` and the collection is untouched.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.tasks.push(Task::new(trimmed.to_string()));
        self.persist();
        self.tasks.last()
    }

    /// Flip `completed` on the matching task. Returns false on no match.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.persist();
        true
    }

    /// Remove the matching task, keeping the order of the rest.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Replace the matching task's text in place. Whitespace-only text is
    /// rejected, same policy as `add`.
    pub fn edit(&mut self, id: &str, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.text = trimmed.to_string();
        self.persist();
        true
    }

    /// Remove every completed task, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Replace the active filter. Pure UI state; never persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The collection as seen through the active filter, insertion order
    /// preserved. Recomputed on every call.
    pub fn filtered(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    fn persist(&self) {
        if self.initialized {
            self.store.save(&self.tasks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory store that records every snapshot it is asked to save.
    struct MemStore {
        seed: Vec<Task>,
        saved: Rc<RefCell<Vec<Vec<Task>>>>,
    }

    impl TodoStore for MemStore {
        fn load(&self) -> Vec<Task> {
            self.seed.clone()
        }

        fn save(&self, tasks: &[Task]) {
            self.saved.borrow_mut().push(tasks.to_vec());
        }
    }

    fn empty_list() -> (TodoList, Rc<RefCell<Vec<Vec<Task>>>>) {
        seeded_list(Vec::new())
    }

    fn seeded_list(seed: Vec<Task>) -> (TodoList, Rc<RefCell<Vec<Vec<Task>>>>) {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let store = MemStore {
            seed,
            saved: Rc::clone(&saved),
        };
        (TodoList::open(Box::new(store)), saved)
    }

    #[test]
    fn add_appends_in_order_with_unique_ids() {
        let (mut list, _) = empty_list();
        list.add("one");
        list.add("two");
        list.add("three");

        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);

        let mut ids: Vec<&str> = list.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn add_trims_text() {
        let (mut list, _) = empty_list();
        let task = list.add("  buy milk  ").unwrap();
        assert_eq!(task.text, "buy milk");
    }

    #[test]
    fn add_rejects_empty_and_whitespace() {
        let (mut list, saved) = empty_list();
        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert!(list.tasks().is_empty());
        assert!(saved.borrow().is_empty());
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let (mut list, _) = empty_list();
        let id = list.add("task").unwrap().id.clone();
        let original = list.tasks()[0].clone();

        assert!(list.toggle(&id));
        assert!(list.tasks()[0].completed);
        assert!(list.toggle(&id));
        assert_eq!(list.tasks()[0], original);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let (mut list, saved) = empty_list();
        list.add("task");
        let saves_before = saved.borrow().len();

        assert!(!list.toggle("no-such-id"));
        assert_eq!(saved.borrow().len(), saves_before);
    }

    #[test]
    fn delete_removes_exactly_one_and_preserves_order() {
        let (mut list, _) = empty_list();
        list.add("a");
        let id = list.add("b").unwrap().id.clone();
        list.add("c");

        assert!(list.delete(&id));
        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);

        // Second delete with the same id is a no-op.
        assert!(!list.delete(&id));
        assert_eq!(list.tasks().len(), 2);
    }

    #[test]
    fn edit_trims_and_rejects_empty() {
        let (mut list, _) = empty_list();
        let id = list.add("original").unwrap().id.clone();

        assert!(!list.edit(&id, "   "));
        assert_eq!(list.tasks()[0].text, "original");

        assert!(list.edit(&id, "  new  "));
        assert_eq!(list.tasks()[0].text, "new");
    }

    #[test]
    fn edit_unknown_id_is_a_noop() {
        let (mut list, _) = empty_list();
        list.add("task");
        assert!(!list.edit("no-such-id", "changed"));
        assert_eq!(list.tasks()[0].text, "task");
    }

    #[test]
    fn edit_does_not_reorder_or_touch_completion() {
        let (mut list, _) = empty_list();
        let first = list.add("first").unwrap().id.clone();
        list.add("second");
        list.toggle(&first);

        list.edit(&first, "first, renamed");
        assert_eq!(list.tasks()[0].text, "first, renamed");
        assert!(list.tasks()[0].completed);
        assert_eq!(list.tasks()[1].text, "second");
    }

    #[test]
    fn clear_completed_is_idempotent() {
        let (mut list, _) = empty_list();
        let a = list.add("a").unwrap().id.clone();
        list.add("b");
        let c = list.add("c").unwrap().id.clone();
        list.toggle(&a);
        list.toggle(&c);

        assert_eq!(list.clear_completed(), 2);
        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["b"]);

        assert_eq!(list.clear_completed(), 0);
        assert_eq!(list.tasks().len(), 1);
    }

    #[test]
    fn filtered_views_and_counts() {
        let (mut list, _) = empty_list();
        let milk = list.add("Buy milk").unwrap().id.clone();
        list.add("Walk dog");
        list.toggle(&milk);

        list.set_filter(Filter::Active);
        let active: Vec<&str> = list.filtered().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(active, ["Walk dog"]);

        list.set_filter(Filter::Completed);
        let done: Vec<&str> = list.filtered().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(done, ["Buy milk"]);

        assert_eq!(list.active_count(), 1);
        assert_eq!(list.completed_count(), 1);

        list.set_filter(Filter::All);
        assert_eq!(list.filtered().len(), 2);
    }

    #[test]
    fn set_filter_never_saves() {
        let (mut list, saved) = empty_list();
        list.set_filter(Filter::Completed);
        list.set_filter(Filter::All);
        assert!(saved.borrow().is_empty());
    }

    #[test]
    fn every_change_saves_the_full_snapshot() {
        let (mut list, saved) = empty_list();
        let id = list.add("a").unwrap().id.clone();
        list.add("b");
        list.toggle(&id);

        let saves = saved.borrow();
        assert_eq!(saves.len(), 3);
        assert_eq!(saves.last().unwrap().as_slice(), list.tasks());
    }

    #[test]
    fn mutations_before_init_are_never_persisted() {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let store = MemStore {
            seed: vec![Task::new("stored".to_string())],
            saved: Rc::clone(&saved),
        };
        let mut list = TodoList::with_store(Box::new(store));

        // Before init the list is empty and writes are suppressed.
        list.add("too early");
        assert!(saved.borrow().is_empty());

        // Init replaces the premature state with the stored collection.
        list.init();
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.tasks()[0].text, "stored");

        list.add("after init");
        assert_eq!(saved.borrow().len(), 1);
        assert_eq!(saved.borrow()[0].len(), 2);
    }

    #[test]
    fn open_starts_from_the_stored_collection() {
        let seed = vec![Task::new("from disk".to_string())];
        let (list, _) = seeded_list(seed);
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.filter(), Filter::All);
    }
}
