use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive macro implementing `Toggle` for a two-variant enum.
///
/// Both variants must be unit variants. `toggled()` maps each variant to
/// the other one.
///
/// # Example
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, Debug, Toggle)]
/// pub enum BoxPosition {
///     Start,
///     End,
/// }
///
/// assert_eq!(BoxPosition::Start.toggled(), BoxPosition::End);
/// ```
#[proc_macro_derive(Toggle)]
pub fn derive_toggle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_toggle(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_toggle(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Toggle can only be derived for enums",
            ))
        }
    };

    if data.variants.len() != 2 {
        return Err(syn::Error::new_spanned(
            name,
            format!(
                "Toggle requires exactly two variants, `{}` has {}",
                name,
                data.variants.len()
            ),
        ));
    }

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "Toggle variants must not carry data",
            ));
        }
    }

    let first = &data.variants[0].ident;
    let second = &data.variants[1].ident;

    Ok(quote! {
        impl #impl_generics ::animate_state::toggle::Toggle for #name #ty_generics #where_clause {
            fn toggled(&self) -> Self {
                match self {
                    #name::#first => #name::#second,
                    #name::#second => #name::#first,
                }
            }
        }
    })
}
