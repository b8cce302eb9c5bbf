//! Contains the `MoveList` structure, akin to a `Vec<PieceMove>`.
//!
//! A [`MoveList`] is what a `Board` hands out when asked for every move the side to move
//! could play. It dereferences to a slice, so indexing, `len()` and `iter()` all work as
//! they would on a `Vec`.
//!
//! [`MoveList`]: struct.MoveList.html

use super::piece_move::PieceMove;
use super::sq::SQ;

use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::vec;

/// This is the list of possible moves for a current position.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct MoveList {
    inner: Vec<PieceMove>,
}

impl From<Vec<PieceMove>> for MoveList {
    fn from(vec: Vec<PieceMove>) -> Self {
        MoveList { inner: vec }
    }
}

impl From<MoveList> for Vec<PieceMove> {
    #[inline]
    fn from(list: MoveList) -> Self {
        list.inner
    }
}

impl MoveList {
    /// Adds a `PieceMove` to the end of the list.
    #[inline(always)]
    pub fn push(&mut self, mv: PieceMove) {
        self.inner.push(mv);
    }

    /// Creates a `Vec<PieceMove>` from this `MoveList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::{MoveList, PieceMove, SQ};
    ///
    /// let mut list = MoveList::default();
    /// list.push(PieceMove::new(SQ::E2, SQ::E4));
    /// let vec: Vec<PieceMove> = list.vec();
    /// assert_eq!(vec.len(), 1);
    /// ```
    #[inline]
    pub fn vec(&self) -> Vec<PieceMove> {
        self.inner.clone()
    }

    /// Returns if the list holds a move with the given squares.
    pub fn contains_move(&self, src: SQ, dst: SQ) -> bool {
        self.inner.iter().any(|m| m.src == src && m.dst == dst)
    }

    /// Returns every move starting on `src`.
    pub fn moves_from(&self, src: SQ) -> impl Iterator<Item = &PieceMove> + '_ {
        self.inner.iter().filter(move |m| m.src == src)
    }
}

impl Deref for MoveList {
    type Target = [PieceMove];

    #[inline]
    fn deref(&self) -> &[PieceMove] {
        &self.inner
    }
}

impl DerefMut for MoveList {
    #[inline]
    fn deref_mut(&mut self) -> &mut [PieceMove] {
        &mut self.inner
    }
}

impl FromIterator<PieceMove> for MoveList {
    fn from_iter<T: IntoIterator<Item = PieceMove>>(iter: T) -> Self {
        MoveList {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveList {
    type Item = PieceMove;
    type IntoIter = vec::IntoIter<PieceMove>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a PieceMove;
    type IntoIter = slice::Iter<'a, PieceMove>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
