// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, GenericParam};

/// Generated type parameters: source type, converter and orientation.
fn leaf_params() -> [GenericParam; 3] {
    [
        parse_quote!(__ConvertibleSrc),
        parse_quote!(__ConvertibleC),
        parse_quote!(__ConvertibleD),
    ]
}

pub fn derive_scalar(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let self_ty = quote! { #name #ty_generics };

    let mut generics = input.generics.clone();
    generics.params.extend(leaf_params());
    generics.make_where_clause().predicates.push(parse_quote! {
        __ConvertibleC: convertible_core::converter::Convert<#self_ty, __ConvertibleSrc, __ConvertibleD>
    });
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics convertible_core::operator::Assign<__ConvertibleSrc, __ConvertibleC, __ConvertibleD>
            for #self_ty #where_clause
        {
            #[inline(always)]
            fn assign_from(
                &mut self,
                src: convertible_core::source::Source<'_, __ConvertibleSrc>,
                converter: &__ConvertibleC,
            ) -> ::std::result::Result<(), convertible_core::error::Error> {
                convertible_core::converter::Convert::convert(converter, src, self)
            }
        }

        impl #impl_generics convertible_core::operator::Equal<__ConvertibleSrc, __ConvertibleC, __ConvertibleD>
            for #self_ty #where_clause
        {
            #[inline(always)]
            fn equal_to(
                &self,
                src: &__ConvertibleSrc,
                converter: &__ConvertibleC,
            ) -> ::std::result::Result<bool, convertible_core::error::Error> {
                convertible_core::converter::Convert::compare(converter, src, self)
            }
        }
    }
}
