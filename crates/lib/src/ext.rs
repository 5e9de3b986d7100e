pub trait SliceExt<T> {
    /// Get mutable references to two distinct, in-bounds elements of a slice.
    /// Returns `None` otherwise.
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut data = [1, 2, 3];
    ///
    /// if let Some((a, b)) = data.get_mut2(0, 2) {
    ///     std::mem::swap(a, b);
    /// }
    ///
    /// assert_eq!(data, [3, 2, 1]);
    /// assert!(data.get_mut2(1, 1).is_none());
    /// ```
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        if a == b || a.max(b) >= self.len() {
            return None;
        }

        let ptr = self.as_mut_ptr();

        // SAFETY: indexes are distinct and in bounds per the check above.
        unsafe {
            let a = &mut *ptr.add(a);
            let b = &mut *ptr.add(b);
            Some((a, b))
        }
    }
}
