//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Properties collected from `#[solution_runner(...)]` arguments.
#[derive(Default)]
struct RunnerProperties {
    /// The expression to use as a solution name; should resolve to a string slice.
    name: Option<Expr>,
    /// The type implementing `ParseData`, if input is parsed before solving.
    parsed: Option<Type>,
    /// The type implementing `Solution<PartOne>`.
    part_one: Option<Type>,
    /// The type implementing `Solution<PartTwo>`.
    part_two: Option<Type>,
}

/// Store a property value, rejecting a key given twice.
fn set_once<T: syn::parse::Parse>(
    slot: &mut Option<T>,
    key: &str,
    meta: &ParseNestedMeta,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

impl RunnerProperties {
    fn parse(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            set_once(&mut self.name, "name", meta)
        } else if meta.path.is_ident("parsed") {
            set_once(&mut self.parsed, "parsed", meta)
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, "part_one", meta)
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, "part_two", meta)
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    }
}

fn missing_property(key: &str) -> TokenStream {
    Error::new(
        proc_macro2::Span::call_site(),
        format!("missing required property: '{key}'"),
    )
    .to_compile_error()
    .into()
}

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// The generated `run` parses input when a `parsed` type is given, then solves both parts in order.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, the puzzle's display name.
///   Can be a string literal or a constant.
/// - `part_one` (required): The type implementing `Solution<PartOne>`.
/// - `part_two` (required): The type implementing `Solution<PartTwo>`.
/// - `parsed` (optional): A type implementing `ParseData`, used to parse input once before both
///   parts. If omitted, the input string is passed directly to both parts.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - A required property is missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// With a struct `Instructions` implementing `ParseData` and a struct `Day01` implementing both
/// `Solution<PartOne>` & `Solution<PartTwo>`, registered on a puzzle collection struct:
///
/// ```ignore
/// #[solution_runner(
///     name = "Day 1: Secret Entrance",
///     parsed = Instructions,
///     part_one = Day01,
///     part_two = Day01
/// )]
/// impl super::AdventOfCode2025<1> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let properties_parser = syn::meta::parser(|meta| properties.parse(&meta));
    parse_macro_input!(args with properties_parser);

    let Some(name_expr) = properties.name else {
        return missing_property("name");
    };
    let Some(part_one_ty) = properties.part_one else {
        return missing_property("part_one");
    };
    let Some(part_two_ty) = properties.part_two else {
        return missing_property("part_two");
    };

    let solve_function_call = if let Some(parsed_ty) = properties.parsed {
        quote! {
            aoc_framework::runner::solve_parsed_full_solution::<
                #parsed_ty,
                #part_one_ty,
                #part_two_ty
            >(#name_expr, input, handler, timed)
        }
    } else {
        quote! {
            aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                #name_expr,
                input,
                handler,
                timed
            )
        }
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    // the type receiving the implementation, from a struct name or an impl block's self type
    let runner_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_function_call
            }
        }
    })
}
