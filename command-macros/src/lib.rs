use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Registers the annotated function in the interaction command registry under its own name.
///
/// The function must have the signature
/// `fn(&CommandData) -> Result<InteractionResponse, DispatchError>`.
#[proc_macro_attribute]
pub fn command_handler(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);
    let fn_name = &input_fn.sig.ident;
    let fn_name_str = fn_name.to_string();

    let expanded = quote! {
        #input_fn

        paste::paste! {
            #[ctor::ctor]
            fn [<__register_command_ #fn_name>]() {
                crate::controller::discord::interaction::register_command(#fn_name_str, #fn_name);
            }
        }
    };

    TokenStream::from(expanded)
}
