use proc_macro::TokenStream as TokenStream1;
use quote::ToTokens;
use syn;

/// This macro is added before a method of the `Round` struct in the impl
/// block. Use this macro to first check if the current round phase is
/// exactly the phase in the attribute.
///
/// For example, `#[allowed_phase(Play)]` will make a method first check
/// if the current round phase is `Play`. If not, the method will return a
/// `GameError::WrongPhase` naming the method and the phase it requires.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let phase = attr.to_string();
    let function_name = ast.sig.ident.to_string();
    let code = format!(
        r#"
    if self.phase != RoundPhase::{} {{
        return Err(GameError::wrong_phase("{}", "{}"));
    }}
"#,
        phase, function_name, phase
    );
    let early_return: TokenStream1 = code.parse().unwrap();
    let early_return: syn::Stmt = syn::parse(early_return).unwrap();
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}
