//! Tuple width specialisation.
//!
//! Every block routine is generic over a [`Width`], so the compiler emits a dedicated copy
//! of the recursion for scalars and for pairs (complex numbers), and one generic copy for
//! everything else. `with_width!` picks the right one at runtime.

/// Number of scalars that move together as one array cell.
pub(crate) trait Width: Copy {
    fn get(self) -> usize;
}

/// Tuple width known at compile time.
#[derive(Clone, Copy)]
pub(crate) struct Fixed<const N: usize>;

impl<const N: usize> Width for Fixed<N> {
    #[inline(always)]
    fn get(self) -> usize {
        N
    }
}

/// Tuple width only known at runtime.
#[derive(Clone, Copy)]
pub(crate) struct Dynamic(pub(crate) usize);

impl Width for Dynamic {
    #[inline(always)]
    fn get(self) -> usize {
        self.0
    }
}

/// Bind `$w` to the specialised width type for `$tuple` and evaluate `$body` with it.
macro_rules! with_width {
    ($tuple:expr, $w:ident => $body:expr) => {
        match $tuple {
            1 => {
                let $w = $crate::tuple::Fixed::<1>;
                $body
            }
            2 => {
                let $w = $crate::tuple::Fixed::<2>;
                $body
            }
            width => {
                let $w = $crate::tuple::Dynamic(width);
                $body
            }
        }
    };
}

pub(crate) use with_width;

/// Copy the tuple at `src[s..]` into `dst[d..]`.
#[inline(always)]
pub(crate) fn copy_tuple<T: Copy, W: Width>(src: &[T], s: usize, dst: &mut [T], d: usize, w: W) {
    let n = w.get();
    dst[d..d + n].copy_from_slice(&src[s..s + n]);
}

/// Exchange the tuples at `data[a..]` and `data[b..]`. The two tuples must not overlap.
#[inline(always)]
pub(crate) fn swap_tuple<T, W: Width>(data: &mut [T], a: usize, b: usize, w: W) {
    for k in 0..w.get() {
        data.swap(a + k, b + k);
    }
}
