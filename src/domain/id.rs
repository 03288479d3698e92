use std::fmt;
use std::marker::PhantomData;

/// Integer identifier tagged with the entity it belongs to, so a customer id can
/// never be passed where a reservation id is expected.
pub struct Id<T> {
    pub value: u64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: u64) -> Self {
        Id { value, _marker: PhantomData }
    }

    /// The identifier following this one, `None` once the id space is used up.
    pub fn next(&self) -> Option<Self> {
        self.value.checked_add(1).map(Id::new)
    }

    /// Next free identifier after the largest one in `ids`, starting at 1.
    ///
    /// # Returns
    /// `None` if the largest id is already `u64::MAX`.
    pub fn after_max<'a>(ids: impl IntoIterator<Item = &'a Id<T>>) -> Option<Self>
    where
        T: 'a,
    {
        ids.into_iter().map(|id| id.value).max().unwrap_or(0).checked_add(1).map(Id::new)
    }
}

// Manual impls: derives would put the bounds on the tag type instead of the id.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {}", display_name, self.value)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct HotelTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct CustomerTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ReservationTag;

pub type HotelId = Id<HotelTag>;
pub type CustomerId = Id<CustomerTag>;
pub type ReservationId = Id<ReservationTag>;
