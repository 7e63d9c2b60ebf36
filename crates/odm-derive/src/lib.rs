use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, punctuated::Punctuated, token::Comma, DeriveInput, LitStr, Meta};

/// Derive `DocumentMarker`, registering the type under its dotted class name.
///
/// The class name defaults to the type name. `#[odm(parent = "Base.Parent")]` prefixes the
/// inheritance chain, `#[odm(name = "Full.Name")]` replaces the whole class name.
#[proc_macro_derive(DocumentMarker, attributes(odm))]
pub fn document_marker_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_document_marker(input).unwrap_or_else(|e| e.to_compile_error().into())
}

/// Generate the implementation of DocumentMarker
/// class name concats the parent chain with the name for 'Base.Parent.TypeName'
fn derive_document_marker(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = &input.generics.split_for_impl();

    let mut parent: Option<LitStr> = None;
    let mut full_name: Option<LitStr> = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("odm")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("parent") {
                parent = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("name") {
                full_name = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `parent` or `name`"))
            }
        })?;
    }

    let class_name = match (full_name, parent) {
        (Some(_), Some(parent)) => {
            return Err(syn::Error::new(
                parent.span(),
                "`parent` and `name` cannot be combined",
            ))
        }
        (Some(full_name), None) => quote! { #full_name },
        (None, Some(parent)) => quote! { concat!(#parent, ".", stringify!(#name)) },
        (None, None) => quote! { stringify!(#name) },
    };

    Ok(quote! {impl #impl_generics ::odm_core::DocumentMarker for #name #type_generics #where_clause {
        fn _class_name() -> &'static str {
            #class_name
        }
    }}
    .into())
}

/// Attribute macro to mark a struct as a document, automatically implementing `DocumentMarker` and required traits.
/// Arguments are forwarded to the derive, eg. `#[document(parent = "Organisation")]`.
///
/// Will cause conflicting implementations if placed after any `#derive(...)]` attributes that implement any of the added traits.
#[proc_macro_attribute]
pub fn document(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut item = parse_macro_input!(item as DeriveInput);
    let attr = proc_macro2::TokenStream::from(attr);

    let mut required_traits: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Debug),
        syn::parse_quote!(::odm_core::DocumentMarker),
    ];

    #[cfg(feature = "serde")]
    let mut serde_traits: Vec<syn::Path> = vec![
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];

    // find any existing #[derive(...)] attributes and remove any duplicates from required_traits
    item.attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Meta, Comma>::parse_terminated)
                .ok()
        })
        .flatten()
        .for_each(|meta| {
            if let Meta::Path(path) = meta {
                if let Some(pos) = required_traits.iter().position(|t| same_trait(t, &path)) {
                    required_traits.remove(pos);
                }
                #[cfg(feature = "serde")]
                if let Some(pos) = serde_traits.iter().position(|t| same_trait(t, &path)) {
                    serde_traits.remove(pos);
                }
            }
        });

    // Add all the missing required traits as a second #[derive(...)] attribute
    if !required_traits.is_empty() {
        item.attrs
            .push(syn::parse_quote!(#[derive(#(#required_traits),*)]));
    }

    #[cfg(feature = "serde")]
    // Add serde traits
    if !serde_traits.is_empty() {
        item.attrs
            .push(syn::parse_quote!(#[derive(#(#serde_traits),*)]));
    }

    // Forward the arguments to the derive helper, after the derive that introduces it
    if !attr.is_empty() {
        item.attrs.push(syn::parse_quote!(#[odm(#attr)]));
    }

    quote! {
        #item
    }
    .into()
}

/// Compare derive paths by their last segment so `DocumentMarker` matches `::odm_core::DocumentMarker`
fn same_trait(a: &syn::Path, b: &syn::Path) -> bool {
    match (a.segments.last(), b.segments.last()) {
        (Some(a), Some(b)) => a.ident == b.ident,
        _ => false,
    }
}
