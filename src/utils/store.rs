pub trait Entity {
    fn id(&self) -> &str;
}

/// In-memory collection addressed by entity id. Lookups are linear scans
/// and `list` keeps insertion order.
#[derive(Clone, Debug)]
pub struct Store<T> {
    items: Vec<T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { items: vec![] }
    }
}

impl<T: Entity + Clone> Store<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .map(|index| self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
