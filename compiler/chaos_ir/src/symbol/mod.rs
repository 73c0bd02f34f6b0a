//! Robin Hood open-addressing symbol table.
//!
//! Maps byte strings to a small tagged payload: either a reserved-word id or
//! the "plain identifier" marker. The lexer seeds it with the reserved words
//! and then resolves every word-shaped token through it, so it doubles as the
//! per-unit identifier table.
//!
//! # Layout
//!
//! Capacity is always a power of two so `hash & mask` selects the home slot.
//! Each occupied slot stores the full 32-bit hash, its home slot and a
//! private copy of the key bytes.
//!
//! # Invariants
//!
//! - `len * 4 < capacity * 3` once an insertion returns. The table grows
//!   before an insertion that would break the bound.
//! - Along any probe run, an entry's probe distance
//!   `(slot - home) & mask` is at most one more than the entry before it.
//!   Insertion keeps this by swapping the travelling entry with any resident
//!   that sits closer to its own home ("richer") than the traveller.
//! - A key is stored at most once.

use std::fmt;

use tracing::{debug, trace};

use crate::hash::{xxhash32, HashFn};

/// Default initial capacity is `1 << DEFAULT_TABLE_ORDER` slots.
pub const DEFAULT_TABLE_ORDER: u32 = 6;

/// Largest accepted table order.
pub const MAX_TABLE_ORDER: u32 = 24;

/// Largest supported capacity.
const MAX_CAPACITY: usize = 1 << MAX_TABLE_ORDER;

/// Id of a reserved word, assigned by whoever seeds the table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ReservedId(u16);

impl ReservedId {
    /// Wrap a raw reserved-word id.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        ReservedId(raw)
    }

    /// The raw id.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Stable id of a symbol table entry.
///
/// Ids are handed out in insertion order and survive resizes, unlike slot
/// positions which move whenever Robin Hood insertion displaces an entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// The raw id.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Payload of a symbol table entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    /// A reserved word.
    Reserved(ReservedId),
    /// Any other name.
    Plain,
}

/// An occupied symbol table slot.
#[derive(Clone, Debug)]
pub struct Symbol {
    hash: u32,
    home: u32,
    id: SymbolId,
    kind: SymbolKind,
    key: Box<[u8]>,
}

impl Symbol {
    /// Full hash of the key.
    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Ideal slot under the current capacity (`hash & mask`).
    #[inline]
    pub fn home(&self) -> u32 {
        self.home
    }

    #[inline]
    pub fn id(&self) -> SymbolId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// The table's own copy of the key bytes.
    #[inline]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The reserved-word id, if this entry is a reserved word.
    #[inline]
    pub fn reserved(&self) -> Option<ReservedId> {
        match self.kind {
            SymbolKind::Reserved(id) => Some(id),
            SymbolKind::Plain => None,
        }
    }

    #[inline]
    fn matches(&self, hash: u32, key: &[u8]) -> bool {
        self.hash == hash && self.key.len() == key.len() && *self.key == *key
    }
}

/// Error returned by fallible symbol table operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolTableError {
    /// Zero-length keys cannot be stored.
    #[error("symbol keys must not be empty")]
    EmptyKey,
    /// The table hit its load-factor bound and could not grow.
    #[error("symbol table cannot grow beyond {capacity} slots")]
    CapacityExhausted { capacity: usize },
    /// The slot array could not be allocated.
    #[error("could not allocate a symbol table of {capacity} slots")]
    AllocationFailed { capacity: usize },
    /// Requested initial order is above [`MAX_TABLE_ORDER`].
    #[error("symbol table order {order} exceeds the maximum of {max}", max = MAX_TABLE_ORDER)]
    OrderTooLarge { order: u32 },
}

/// Robin Hood hash table from byte strings to [`SymbolKind`].
#[derive(Clone)]
pub struct SymbolTable {
    slots: Vec<Option<Symbol>>,
    len: usize,
    next_id: u32,
    hasher: HashFn,
    seed: u32,
    /// Growth stops here; `MAX_CAPACITY` outside tests.
    max_capacity: usize,
}

impl SymbolTable {
    /// Create a table with `1 << order` slots using [`xxhash32`] and seed 0.
    pub fn new(order: u32) -> Result<Self, SymbolTableError> {
        Self::with_hasher(order, xxhash32, 0)
    }

    /// Create a table with `1 << order` slots and an injected hash function.
    ///
    /// Fails for `order > MAX_TABLE_ORDER` or if the slots cannot be
    /// allocated.
    pub fn with_hasher(order: u32, hasher: HashFn, seed: u32) -> Result<Self, SymbolTableError> {
        if order > MAX_TABLE_ORDER {
            return Err(SymbolTableError::OrderTooLarge { order });
        }
        let slots = empty_slots(1 << order)?;
        Ok(Self::from_slots(slots, hasher, seed))
    }

    fn from_slots(slots: Vec<Option<Symbol>>, hasher: HashFn, seed: u32) -> Self {
        SymbolTable {
            slots,
            len: 0,
            next_id: 0,
            hasher,
            seed,
            max_capacity: MAX_CAPACITY,
        }
    }

    /// Lower the growth limit so exhaustion can be reached in tests.
    #[cfg(test)]
    pub(crate) fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Number of slots. Always a power of two.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Seed passed to every hash call.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    fn hash_key(&self, key: &[u8]) -> u32 {
        (self.hasher)(key, self.seed)
    }

    /// Find the entry for `key`.
    ///
    /// Empty keys are never stored and always miss.
    pub fn lookup(&self, key: &[u8]) -> Option<&Symbol> {
        if key.is_empty() {
            return None;
        }
        let hash = self.hash_key(key);
        self.find_slot(hash, key).map(|idx| self.occupied(idx))
    }

    /// Find `key`, inserting it as a plain identifier on a miss.
    pub fn lookup_or_insert(&mut self, key: &[u8]) -> Result<&Symbol, SymbolTableError> {
        self.lookup_or_insert_with(key, SymbolKind::Plain)
    }

    /// Find `key`, inserting it with `kind` on a miss.
    ///
    /// An existing entry is returned unchanged, whatever its kind.
    pub fn lookup_or_insert_with(
        &mut self,
        key: &[u8],
        kind: SymbolKind,
    ) -> Result<&Symbol, SymbolTableError> {
        if key.is_empty() {
            return Err(SymbolTableError::EmptyKey);
        }
        let hash = self.hash_key(key);
        if let Some(idx) = self.find_slot(hash, key) {
            return Ok(self.occupied(idx));
        }

        if (self.len + 1) * 4 >= self.capacity() * 3 {
            self.resize()?;
        }

        let id = SymbolId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(SymbolTableError::CapacityExhausted {
                capacity: self.capacity(),
            })?;

        let idx = self.place(Symbol {
            hash,
            home: 0,
            id,
            kind,
            key: key.into(),
        });
        self.len += 1;
        trace!(id = id.raw(), slot = idx, len = self.len, "symbol inserted");
        Ok(self.occupied(idx))
    }

    /// Double the capacity and re-place every entry.
    ///
    /// Home slots are recomputed against the new mask.
    pub fn resize(&mut self) -> Result<(), SymbolTableError> {
        let old_capacity = self.capacity();
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(capacity) if capacity <= self.max_capacity => capacity,
            _ => {
                return Err(SymbolTableError::CapacityExhausted {
                    capacity: old_capacity,
                })
            }
        };

        let new_slots = empty_slots(new_capacity)?;
        let old_slots = std::mem::replace(&mut self.slots, new_slots);
        for symbol in old_slots.into_iter().flatten() {
            self.place(symbol);
        }

        debug!(
            old_capacity,
            new_capacity,
            entries = self.len,
            "symbol table resized"
        );
        Ok(())
    }

    /// Iterate over stored entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.slots.iter().flatten()
    }

    /// Largest probe distance of any stored entry.
    pub fn max_probe_distance(&self) -> usize {
        let mask = self.mask();
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|s| probe_distance(idx, s.home, mask)))
            .max()
            .unwrap_or(0)
    }

    /// Locate the slot holding `key`.
    ///
    /// Stops at an empty slot, or at a resident closer to its home than the
    /// distance already travelled: Robin Hood ordering means the key would
    /// have displaced that resident had it been inserted.
    fn find_slot(&self, hash: u32, key: &[u8]) -> Option<usize> {
        let mask = self.mask();
        let mut idx = hash as usize & mask;
        let mut dist = 0;
        loop {
            let resident = self.slots[idx].as_ref()?;
            if resident.matches(hash, key) {
                return Some(idx);
            }
            if probe_distance(idx, resident.home, mask) < dist || dist == mask {
                return None;
            }
            dist += 1;
            idx = (idx + 1) & mask;
        }
    }

    /// Robin Hood placement of a symbol known to be absent.
    ///
    /// Returns the slot where `symbol` itself ended up; entries it displaced
    /// keep travelling further along the run.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "mask < MAX_CAPACITY (2^24)"
    )]
    fn place(&mut self, mut symbol: Symbol) -> usize {
        let mask = self.mask();
        symbol.home = symbol.hash & mask as u32;

        let mut idx = symbol.home as usize;
        let mut dist = 0;
        let mut landed = None;
        let mut travelling = symbol;
        loop {
            let slot = &mut self.slots[idx];
            match slot {
                None => {
                    *slot = Some(travelling);
                    return landed.unwrap_or(idx);
                }
                Some(resident) => {
                    let resident_dist = probe_distance(idx, resident.home, mask);
                    if resident_dist < dist {
                        std::mem::swap(resident, &mut travelling);
                        landed.get_or_insert(idx);
                        dist = resident_dist;
                    }
                }
            }
            dist += 1;
            idx = (idx + 1) & mask;
        }
    }

    fn occupied(&self, idx: usize) -> &Symbol {
        match &self.slots[idx] {
            Some(symbol) => symbol,
            None => unreachable!("slot {idx} was located as occupied"),
        }
    }
}

impl Default for SymbolTable {
    /// A table of `1 << DEFAULT_TABLE_ORDER` slots using [`xxhash32`].
    fn default() -> Self {
        let slots = std::iter::repeat_with(|| None)
            .take(1 << DEFAULT_TABLE_ORDER)
            .collect();
        Self::from_slots(slots, xxhash32, 0)
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Distance of `idx` past `home`, wrapping at the end of the table.
#[inline]
fn probe_distance(idx: usize, home: u32, mask: usize) -> usize {
    idx.wrapping_sub(home as usize) & mask
}

fn empty_slots(capacity: usize) -> Result<Vec<Option<Symbol>>, SymbolTableError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| SymbolTableError::AllocationFailed { capacity })?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}
