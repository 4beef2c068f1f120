//! Object literal syntax for [`Fields`](crate::Fields) maps.

/// Creates a [`Fields`](crate::Fields) map with object literal syntax.
///
/// Handy for [`Builder::read_from_object`](crate::Builder::read_from_object)
/// and for comparing build output.
///
/// ```rust
/// use sugars_builder_factory::fields;
///
/// let name = fields! {
///     "firstName" => "Test",
///     "lastName" => "Tester",
/// };
/// assert_eq!(name.len(), 2);
/// assert_eq!(name["lastName"], "Tester");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        <$crate::Fields<_>>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = <$crate::Fields<_>>::new();
            $(
                map.insert(::std::string::String::from($key), $value);
            )+
            map
        }
    };
}
