//! Flat C-callable wrappers over the recursive vector types.
//!
//! Every wrapper operates on opaque handles so a binding generator can walk
//! the exported symbols without understanding the recursion:
//!
//! - Every factory (`_new`, `_splat`, `_set`, `_join`, `_load`, `_load2/3/4`,
//!   every operator returning a vector) allocates the result and transfers
//!   exactly one owning handle to the caller.
//! - `_free` consumes a handle. Freeing a handle twice, or using it after the
//!   free, is undefined behavior; nothing checks for it.
//! - Operand handles (`*const`) are borrowed, never consumed.
//! - The `_*_assign_scalar` forms overwrite the vector behind the receiver
//!   handle and return that same handle, transferring no new ownership.
//! - Scalars, lane indices, shift counts and boolean reductions cross the
//!   boundary by value.
//! - `_load`/`_store` take a raw pointer to at least `N * sizeof(element)`
//!   bytes; the caller owns that buffer.
//!
//! The full grid of lane counts {2, 4, 8, 16} and element types {f32, f64,
//! u8, u16, i32, u32} is exported, named `lanes_<elem>x<n>_<op>`. One-lane
//! handles (`lanes_<elem>x1_*`) exist only as the endpoints of `_split` and
//! `_join` on two-lane vectors and carry a minimal surface.

use alloc::boxed::Box;

use crate::vectors::*;

// region: Target ABI Diagnostic

#[cfg(target_arch = "x86_64")]
const TARGET_ABI: &str = "x86_64\0";
#[cfg(target_arch = "x86")]
const TARGET_ABI: &str = "x86\0";
#[cfg(target_arch = "aarch64")]
const TARGET_ABI: &str = "arm64-v8a\0";
#[cfg(target_arch = "arm")]
const TARGET_ABI: &str = "armeabi-v7a\0";
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "x86",
    target_arch = "aarch64",
    target_arch = "arm"
)))]
const TARGET_ABI: &str = "unknown\0";

/// Name of the target ABI as a static NUL-terminated string. The pointer is
/// valid for the lifetime of the process; the caller must not free it.
#[no_mangle]
pub extern "C" fn lanes_target_abi() -> *const core::ffi::c_char {
    TARGET_ABI.as_ptr() as *const core::ffi::c_char
}

// endregion: Target ABI Diagnostic

/// Moves a result onto the heap and hands the caller its only owner.
#[inline(always)]
fn own<V>(v: V) -> *mut V {
    Box::into_raw(Box::new(v))
}

// region: Wrapper Macros

// Operations shared by every element type, mirroring the vector trait
// surface one exported symbol per operation.
macro_rules! capi_core {
    ($elem:ident, $n:tt, $halfn:tt, ($($arg:ident),+)) => { paste::paste! {
        // construction and release
        #[no_mangle]
        pub extern "C" fn [<lanes_ $elem x $n _new>]() -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::default())
        }
        #[no_mangle]
        pub extern "C" fn [<lanes_ $elem x $n _splat>](value: $elem) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::splat(value))
        }
        #[no_mangle]
        pub extern "C" fn [<lanes_ $elem x $n _set>]($($arg: $elem),+) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::from_array([$($arg),+]))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _join>](
            lo: *const [<$elem x $halfn>],
            hi: *const [<$elem x $halfn>],
        ) -> *mut [<$elem x $n>] {
            own(Pair::join(*lo, *hi))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _free>](v: *mut [<$elem x $n>]) {
            drop(Box::from_raw(v));
        }

        // decomposition writes through the two borrowed half-width handles
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _split>](
            v: *const [<$elem x $n>],
            lo: *mut [<$elem x $halfn>],
            hi: *mut [<$elem x $halfn>],
        ) {
            let (l, h) = (*v).split();
            *lo = l;
            *hi = h;
        }

        // element access and memory transfer
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _get>](
            v: *const [<$elem x $n>],
            k: i32,
        ) -> $elem {
            (*v).get(k as usize)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _load>](
            ptr: *const $elem,
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::read_ptr(ptr))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _store>](
            v: *const [<$elem x $n>],
            ptr: *mut $elem,
        ) {
            (*v).write_ptr(ptr)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _load2>](
            ptr: *const $elem,
            a: *mut *mut [<$elem x $n>],
            b: *mut *mut [<$elem x $n>],
        ) {
            let [va, vb] = <[<$elem x $n>]>::read2_ptr(ptr);
            *a = own(va);
            *b = own(vb);
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _load3>](
            ptr: *const $elem,
            a: *mut *mut [<$elem x $n>],
            b: *mut *mut [<$elem x $n>],
            c: *mut *mut [<$elem x $n>],
        ) {
            let [va, vb, vc] = <[<$elem x $n>]>::read3_ptr(ptr);
            *a = own(va);
            *b = own(vb);
            *c = own(vc);
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _load4>](
            ptr: *const $elem,
            a: *mut *mut [<$elem x $n>],
            b: *mut *mut [<$elem x $n>],
            c: *mut *mut [<$elem x $n>],
            d: *mut *mut [<$elem x $n>],
        ) {
            let [va, vb, vc, vd] = <[<$elem x $n>]>::read4_ptr(ptr);
            *a = own(va);
            *b = own(vb);
            *c = own(vc);
            *d = own(vd);
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _store2>](
            ptr: *mut $elem,
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) {
            <[<$elem x $n>]>::write2_ptr(ptr, &[*a, *b]);
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _store3>](
            ptr: *mut $elem,
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
            c: *const [<$elem x $n>],
        ) {
            <[<$elem x $n>]>::write3_ptr(ptr, &[*a, *b, *c]);
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _store4>](
            ptr: *mut $elem,
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
            c: *const [<$elem x $n>],
            d: *const [<$elem x $n>],
        ) {
            <[<$elem x $n>]>::write4_ptr(ptr, &[*a, *b, *c, *d]);
        }

        // horizontal reductions, by value
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _reduce_min>](
            v: *const [<$elem x $n>],
        ) -> $elem {
            (*v).reduce_min()
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _reduce_max>](
            v: *const [<$elem x $n>],
        ) -> $elem {
            (*v).reduce_max()
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _any_true>](
            v: *const [<$elem x $n>],
        ) -> bool {
            (*v).any_true()
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _all_true>](
            v: *const [<$elem x $n>],
        ) -> bool {
            (*v).all_true()
        }

        // unary operators
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _logical_not>](
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*v).logical_not())
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _bit_not>](
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(!*v)
        }

        // vector-vector binary operators
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _add>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(*a + *b)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _sub>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(*a - *b)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _mul>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(*a * *b)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _div>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(*a / *b)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _and>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(*a & *b)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _or>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(*a | *b)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _xor>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(*a ^ *b)
        }

        // comparisons produce mask vectors
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _eq>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).simd_eq(*b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _ne>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).simd_ne(*b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _le>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).simd_le(*b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _ge>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).simd_ge(*b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _lt>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).simd_lt(*b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _gt>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).simd_gt(*b))
        }

        // lane-wise min/max and mask select
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _min>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>] as Vector>::min(*a, *b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _max>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>] as Vector>::max(*a, *b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _select>](
            mask: *const [<$elem x $n>],
            t: *const [<$elem x $n>],
            e: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*mask).select(*t, *e))
        }

        // three-operand sum, see `vectors::fma`
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _fma>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
            c: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(fma(*a, *b, *c))
        }

        // scalar on the right of every binary operator
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _add_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own(*v + value)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _sub_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own(*v - value)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _mul_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own(*v * value)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _div_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own(*v / value)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _and_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own(*v & value)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _or_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own(*v | value)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _xor_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own(*v ^ value)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _eq_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own((*v).simd_eq(<[<$elem x $n>]>::splat(value)))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _ne_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own((*v).simd_ne(<[<$elem x $n>]>::splat(value)))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _le_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own((*v).simd_le(<[<$elem x $n>]>::splat(value)))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _ge_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own((*v).simd_ge(<[<$elem x $n>]>::splat(value)))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _lt_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own((*v).simd_lt(<[<$elem x $n>]>::splat(value)))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _gt_scalar>](
            v: *const [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            own((*v).simd_gt(<[<$elem x $n>]>::splat(value)))
        }

        // scalar on the left
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_add>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(value + *v)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_sub>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(value - *v)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_mul>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(value * *v)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_div>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(value / *v)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_and>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(value & *v)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_or>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(value | *v)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_xor>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(value ^ *v)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_eq>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::splat(value).simd_eq(*v))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_ne>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::splat(value).simd_ne(*v))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_le>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::splat(value).simd_le(*v))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_ge>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::splat(value).simd_ge(*v))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_lt>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::splat(value).simd_lt(*v))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _scalar_gt>](
            value: $elem,
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(<[<$elem x $n>]>::splat(value).simd_gt(*v))
        }

        // in-place scalar compound assignment, returning the receiver handle
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _add_assign_scalar>](
            v: *mut [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            *v += value;
            v
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _sub_assign_scalar>](
            v: *mut [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            *v -= value;
            v
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _mul_assign_scalar>](
            v: *mut [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            *v *= value;
            v
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _div_assign_scalar>](
            v: *mut [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            *v /= value;
            v
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _and_assign_scalar>](
            v: *mut [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            *v &= value;
            v
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _or_assign_scalar>](
            v: *mut [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            *v |= value;
            v
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _xor_assign_scalar>](
            v: *mut [<$elem x $n>],
            value: $elem,
        ) -> *mut [<$elem x $n>] {
            *v ^= value;
            v
        }

        // index-list gathers into each output width
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shuffle2>](
            v: *const [<$elem x $n>],
            i0: i32,
            i1: i32,
        ) -> *mut [<$elem x2>] {
            own((*v).shuffle2([i0 as usize, i1 as usize]))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shuffle4>](
            v: *const [<$elem x $n>],
            i0: i32,
            i1: i32,
            i2: i32,
            i3: i32,
        ) -> *mut [<$elem x4>] {
            own((*v).shuffle4([i0 as usize, i1 as usize, i2 as usize, i3 as usize]))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shuffle8>](
            v: *const [<$elem x $n>],
            i0: i32,
            i1: i32,
            i2: i32,
            i3: i32,
            i4: i32,
            i5: i32,
            i6: i32,
            i7: i32,
        ) -> *mut [<$elem x8>] {
            own((*v).shuffle8([
                i0 as usize,
                i1 as usize,
                i2 as usize,
                i3 as usize,
                i4 as usize,
                i5 as usize,
                i6 as usize,
                i7 as usize,
            ]))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shuffle16>](
            v: *const [<$elem x $n>],
            i0: i32,
            i1: i32,
            i2: i32,
            i3: i32,
            i4: i32,
            i5: i32,
            i6: i32,
            i7: i32,
            i8: i32,
            i9: i32,
            i10: i32,
            i11: i32,
            i12: i32,
            i13: i32,
            i14: i32,
            i15: i32,
        ) -> *mut [<$elem x16>] {
            own((*v).shuffle16([
                i0 as usize,
                i1 as usize,
                i2 as usize,
                i3 as usize,
                i4 as usize,
                i5 as usize,
                i6 as usize,
                i7 as usize,
                i8 as usize,
                i9 as usize,
                i10 as usize,
                i11 as usize,
                i12 as usize,
                i13 as usize,
                i14 as usize,
                i15 as usize,
            ]))
        }
    }};
}

// Absolute value and negation for signed element types.
macro_rules! capi_signed {
    ($elem:ident, $n:tt) => { paste::paste! {
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _abs>](
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*v).abs())
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _neg>](
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own(-*v)
        }
    }};
}

// Square root and floor for floating point element types.
macro_rules! capi_float {
    ($elem:ident, $n:tt) => { paste::paste! {
        #[cfg(feature = "std")]
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _sqrt>](
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*v).sqrt())
        }
        #[cfg(feature = "std")]
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _floor>](
            v: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*v).floor())
        }
    }};
}

// Shift operators for integer element types. Shift counts past the lane
// width are the caller's contract violation, as in C.
macro_rules! capi_shift {
    ($elem:ident, $n:tt) => { paste::paste! {
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shl>](
            v: *const [<$elem x $n>],
            bits: i32,
        ) -> *mut [<$elem x $n>] {
            own(*v << bits as u32)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shr>](
            v: *const [<$elem x $n>],
            bits: i32,
        ) -> *mut [<$elem x $n>] {
            own(*v >> bits as u32)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shl_assign>](
            v: *mut [<$elem x $n>],
            bits: i32,
        ) -> *mut [<$elem x $n>] {
            *v <<= bits as u32;
            v
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _shr_assign>](
            v: *mut [<$elem x $n>],
            bits: i32,
        ) -> *mut [<$elem x $n>] {
            *v >>= bits as u32;
            v
        }
    }};
}

// Saturating addition and high multiply for unsigned element types.
macro_rules! capi_unsigned {
    ($elem:ident, $n:tt) => { paste::paste! {
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _saturated_add>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).saturated_add(*b))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x $n _mul_hi>](
            a: *const [<$elem x $n>],
            b: *const [<$elem x $n>],
        ) -> *mut [<$elem x $n>] {
            own((*a).mul_hi(*b))
        }
    }};
}

// One-lane handles only exist as `_split`/`_join` endpoints of the two-lane
// vectors, so their surface is minimal.
macro_rules! capi_unit {
    ($elem:ident) => { paste::paste! {
        #[no_mangle]
        pub extern "C" fn [<lanes_ $elem x1 _splat>](value: $elem) -> *mut [<$elem x1>] {
            own(Single(value))
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x1 _get>](
            v: *const [<$elem x1>],
            k: i32,
        ) -> $elem {
            (*v).get(k as usize)
        }
        #[no_mangle]
        pub unsafe extern "C" fn [<lanes_ $elem x1 _free>](v: *mut [<$elem x1>]) {
            drop(Box::from_raw(v));
        }
    }};
}

// endregion: Wrapper Macros

// region: Instantiations

macro_rules! capi_float_family {
    ($elem:ident) => {
        capi_unit!($elem);
        capi_core!($elem, 2, 1, (a, b));
        capi_core!($elem, 4, 2, (a, b, c, d));
        capi_core!($elem, 8, 4, (a, b, c, d, e, f, g, h));
        capi_core!($elem, 16, 8, (a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p));
        capi_signed!($elem, 2);
        capi_signed!($elem, 4);
        capi_signed!($elem, 8);
        capi_signed!($elem, 16);
        capi_float!($elem, 2);
        capi_float!($elem, 4);
        capi_float!($elem, 8);
        capi_float!($elem, 16);
    };
}

macro_rules! capi_signed_int_family {
    ($elem:ident) => {
        capi_unit!($elem);
        capi_core!($elem, 2, 1, (a, b));
        capi_core!($elem, 4, 2, (a, b, c, d));
        capi_core!($elem, 8, 4, (a, b, c, d, e, f, g, h));
        capi_core!($elem, 16, 8, (a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p));
        capi_signed!($elem, 2);
        capi_signed!($elem, 4);
        capi_signed!($elem, 8);
        capi_signed!($elem, 16);
        capi_shift!($elem, 2);
        capi_shift!($elem, 4);
        capi_shift!($elem, 8);
        capi_shift!($elem, 16);
    };
}

macro_rules! capi_unsigned_family {
    ($elem:ident) => {
        capi_unit!($elem);
        capi_core!($elem, 2, 1, (a, b));
        capi_core!($elem, 4, 2, (a, b, c, d));
        capi_core!($elem, 8, 4, (a, b, c, d, e, f, g, h));
        capi_core!($elem, 16, 8, (a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p));
        capi_shift!($elem, 2);
        capi_shift!($elem, 4);
        capi_shift!($elem, 8);
        capi_shift!($elem, 16);
        capi_unsigned!($elem, 2);
        capi_unsigned!($elem, 4);
        capi_unsigned!($elem, 8);
        capi_unsigned!($elem, 16);
    };
}

capi_float_family!(f32);
capi_float_family!(f64);
capi_unsigned_family!(u8);
capi_unsigned_family!(u16);
capi_unsigned_family!(u32);
capi_signed_int_family!(i32);

// endregion: Instantiations

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_lifecycle_round_trip() {
        unsafe {
            let a = lanes_f32x4_set(1.0, 2.0, 3.0, 4.0);
            let b = lanes_f32x4_splat(2.0);
            let sum = lanes_f32x4_add(a, b);
            for k in 0..4 {
                assert_eq!(lanes_f32x4_get(sum, k), (k + 1) as f32 + 2.0);
            }
            lanes_f32x4_free(sum);
            lanes_f32x4_free(b);
            lanes_f32x4_free(a);
        }
    }

    #[test]
    fn load_and_store_use_caller_buffers() {
        unsafe {
            let data: [u16; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
            let v = lanes_u16x8_load(data.as_ptr());
            assert_eq!(lanes_u16x8_reduce_max(v), 8);

            let mut out = [0u16; 8];
            lanes_u16x8_store(v, out.as_mut_ptr());
            assert_eq!(out, data);
            lanes_u16x8_free(v);
        }
    }

    #[test]
    fn deinterleave_writes_new_owned_handles() {
        unsafe {
            let data: [u8; 8] = [10, 90, 11, 91, 12, 92, 13, 93];
            let mut a: *mut u8x4 = core::ptr::null_mut();
            let mut b: *mut u8x4 = core::ptr::null_mut();
            lanes_u8x4_load2(data.as_ptr(), &mut a, &mut b);
            for k in 0..4 {
                assert_eq!(lanes_u8x4_get(a, k), 10 + k as u8);
                assert_eq!(lanes_u8x4_get(b, k), 90 + k as u8);
            }

            let mut out = [0u8; 8];
            lanes_u8x4_store2(out.as_mut_ptr(), a, b);
            assert_eq!(out, data);

            lanes_u8x4_free(a);
            lanes_u8x4_free(b);
        }
    }

    #[test]
    fn split_fills_borrowed_halves() {
        unsafe {
            let v = lanes_i32x4_set(1, 2, 3, 4);
            let lo = lanes_i32x2_splat(0);
            let hi = lanes_i32x2_splat(0);
            lanes_i32x4_split(v, lo, hi);
            assert_eq!(lanes_i32x2_get(lo, 0), 1);
            assert_eq!(lanes_i32x2_get(lo, 1), 2);
            assert_eq!(lanes_i32x2_get(hi, 0), 3);
            assert_eq!(lanes_i32x2_get(hi, 1), 4);

            let joined = lanes_i32x4_join(lo, hi);
            for k in 0..4 {
                assert_eq!(lanes_i32x4_get(joined, k), k + 1);
            }

            lanes_i32x4_free(joined);
            lanes_i32x2_free(hi);
            lanes_i32x2_free(lo);
            lanes_i32x4_free(v);
        }
    }

    #[test]
    fn comparison_select_chain() {
        unsafe {
            let a = lanes_f32x2_set(1.0, 5.0);
            let b = lanes_f32x2_splat(3.0);
            let mask = lanes_f32x2_lt(a, b);
            let t = lanes_f32x2_splat(10.0);
            let e = lanes_f32x2_splat(20.0);
            let picked = lanes_f32x2_select(mask, t, e);
            assert_eq!(lanes_f32x2_get(picked, 0), 10.0);
            assert_eq!(lanes_f32x2_get(picked, 1), 20.0);
            for v in [a, b, mask, t, e, picked] {
                lanes_f32x2_free(v);
            }
        }
    }

    #[test]
    fn assign_forms_return_the_receiver() {
        unsafe {
            let v = lanes_u32x4_set(1, 2, 3, 4);
            let same = lanes_u32x4_add_assign_scalar(v, 10);
            assert_eq!(same, v);
            assert_eq!(lanes_u32x4_get(v, 3), 14);
            let same = lanes_u32x4_shl_assign(v, 1);
            assert_eq!(same, v);
            assert_eq!(lanes_u32x4_get(v, 0), 22);
            lanes_u32x4_free(v);
        }
    }

    #[test]
    fn unsigned_extras_and_shuffle() {
        unsafe {
            let a = lanes_u8x4_splat(250);
            let b = lanes_u8x4_splat(10);
            let clamped = lanes_u8x4_saturated_add(a, b);
            assert_eq!(lanes_u8x4_get(clamped, 0), 255);

            let h = lanes_u16x4_splat(0xFFFF);
            let two = lanes_u16x4_splat(2);
            let hi = lanes_u16x4_mul_hi(h, two);
            assert_eq!(lanes_u16x4_get(hi, 0), 1);

            let v = lanes_f32x2_set(1.0, 2.0);
            let swapped = lanes_f32x2_shuffle2(v, 1, 0);
            assert_eq!(lanes_f32x2_get(swapped, 0), 2.0);
            assert_eq!(lanes_f32x2_get(swapped, 1), 1.0);
            let wide = lanes_f32x2_shuffle4(v, 0, 0, 0, 0);
            assert_eq!(lanes_f32x4_get(wide, 3), 1.0);

            lanes_f32x4_free(wide);
            lanes_f32x2_free(swapped);
            lanes_f32x2_free(v);
            lanes_u16x4_free(hi);
            lanes_u16x4_free(two);
            lanes_u16x4_free(h);
            lanes_u8x4_free(clamped);
            lanes_u8x4_free(b);
            lanes_u8x4_free(a);
        }
    }

    #[test]
    fn fma_is_a_three_way_sum() {
        unsafe {
            let a = lanes_f64x2_set(1.0, 2.0);
            let b = lanes_f64x2_splat(10.0);
            let c = lanes_f64x2_splat(100.0);
            let r = lanes_f64x2_fma(a, b, c);
            assert_eq!(lanes_f64x2_get(r, 0), 111.0);
            assert_eq!(lanes_f64x2_get(r, 1), 112.0);
            for v in [a, b, c, r] {
                lanes_f64x2_free(v);
            }
        }
    }

    #[test]
    fn target_abi_is_a_c_string() {
        let ptr = lanes_target_abi();
        assert!(!ptr.is_null());
        let s = unsafe { core::ffi::CStr::from_ptr(ptr) };
        assert!(!s.to_bytes().is_empty());
    }
}
