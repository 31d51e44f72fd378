use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a four element color representation: three named components
/// followed by an alpha component.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, alpha is added automatically.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "models can not be generic")
            .to_compile_error()
            .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    if let syn::Fields::Named(ref mut named) = input.fields {
        let alpha = match syn::Field::parse_named.parse2(syn::parse_quote! {
            /// The alpha component, passed through every conversion untouched.
            pub alpha: crate::color::Component
        }) {
            Ok(field) => field,
            Err(err) => return err.to_compile_error().into(),
        };
        named.named.push(alpha);
    } else {
        return syn::Error::new_spanned(&input, "models must use named fields")
            .to_compile_error()
            .into();
    }

    let struct_name = input.ident.clone();
    let operation = format!(
        "{}::from_slice",
        struct_name.to_string().to_case(Case::Snake)
    );

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new representation from its three components and alpha.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                }
            }

            /// Create a new, fully opaque representation.
            pub const fn opaque(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self::new(#field1, #field2, #field3, 1.0)
            }

            /// Create a representation from 3 or 4 ordered components. When
            /// alpha is omitted it defaults to 1.0.
            pub fn from_slice(values: &[crate::color::Component]) -> crate::error::Result<Self> {
                match *values {
                    [c0, c1, c2] => Ok(Self::opaque(c0, c1, c2)),
                    [c0, c1, c2, alpha] => Ok(Self::new(c0, c1, c2, alpha)),
                    _ => Err(crate::error::ColorError::Arity {
                        operation: #operation,
                        expected: 3..=4,
                        actual: values.len(),
                    }),
                }
            }

            /// Return the components in order, alpha last.
            pub const fn to_array(&self) -> [crate::color::Component; 4] {
                [self.#field1, self.#field2, self.#field3, self.alpha]
            }
        }

        impl From<[crate::color::Component; 4]> for #struct_name {
            fn from(value: [crate::color::Component; 4]) -> Self {
                Self::new(value[0], value[1], value[2], value[3])
            }
        }

        impl From<#struct_name> for [crate::color::Component; 4] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
