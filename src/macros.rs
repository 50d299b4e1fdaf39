/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Leaves other than `null`, `true`, `false`,
/// arrays and objects go through `Value::from`, so string leaves borrow for as long
/// as the expression they come from.
///
/// # Examples
///
/// ```rust
/// use json_borrow::{to_string, value};
///
/// let doc = value!({ "tags": ["a", "b"], "count": 2, "extra": null });
/// assert_eq!(to_string(&doc), r#"{"tags":["a","b"],"count":2,"extra":null}"#);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert_if_absent($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
