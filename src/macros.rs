/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing construction macros. Used for extracting macro repetition count
/// for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [Ring](crate::polygon::Ring) with the vertexes given as a list of (x, y) tuples.
///
/// The ring is implicitly closed (the last vertex connects back to the first).
///
/// # Examples
///
/// ```
/// # use polyvis::ring;
/// # use polyvis::core::math::Vector2;
/// let ring = ring![(0.0, 1.0), (2.0, 0.0), (2.0, 2.0)];
/// assert_eq!(ring.vertex_count(), 3);
/// assert_eq!(ring.at(0), Vector2::new(0.0, 1.0));
/// assert_eq!(ring.at(2), Vector2::new(2.0, 2.0));
/// ```
#[macro_export]
macro_rules! ring {
    ($( $xy:expr ),* $(,)?) => {
        {
            use $crate::polygon::*;
            let size = <[()]>::len(&[$($crate::replace_expr!(($xy) ())),*]);
            let mut r = Ring::with_capacity(size);
            $(
                r.add($xy.0, $xy.1);
            )*
            r
        }
    };
}
