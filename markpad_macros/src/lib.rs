mod record;

use proc_macro::TokenStream;

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "documents")]
/// struct DocumentRecord {
///     pub id: String,
///     pub title: String,
/// }
/// ```
///
/// The collection defaults to the snake_case struct name with an `s` appended.
/// The id defaults to a field named `id`; another field can be marked with
/// `#[record(id)]`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
