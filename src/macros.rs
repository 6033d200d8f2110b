/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// `undefined` is accepted alongside the JSON keywords. Any other expression
/// is converted with `Value::from`.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{value, Value};
///
/// let v = value!({ "name": "Alice", "missing": undefined, "tags": ["a", "b"] });
/// let obj = v.as_object().unwrap();
/// assert_eq!(obj.get("missing"), Some(&Value::Undefined));
/// ```
#[macro_export]
macro_rules! value {
    // JSON keywords, plus `undefined`
    (undefined) => {
        $crate::Value::Undefined
    };

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

    // Elements are single token trees; wrap longer expressions in parentheses.
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ObjectMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ObjectMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}
