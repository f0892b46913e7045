//! Proptest generators for property-based testing.

use proptest::prelude::*;

use coinage_core::{Identity, Keypair, Transaction, TransactionDraft, TxSignature};

/// Generate a keypair from an arbitrary seed.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate an identity with a real backing key.
pub fn identity() -> impl Strategy<Value = Identity> {
    keypair().prop_map(|kp| Identity::from_public_key(&kp.public_key()))
}

/// Generate a recipient name.
pub fn recipient() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9_-]{0,31}".prop_map(String::from)
}

/// Generate a transfer amount.
pub fn amount() -> impl Strategy<Value = u64> {
    0u64..=u64::MAX
}

/// Generate an arbitrary (usually invalid) signature claim.
pub fn signature_claim() -> impl Strategy<Value = TxSignature> {
    "[0-9a-zA-Z]{0,200}".prop_map(TxSignature::from_hex)
}

/// Parameters for generating a signed transaction.
#[derive(Debug, Clone)]
pub struct TxParams {
    pub seed: [u8; 32],
    pub recipient: String,
    pub amount: u64,
}

impl Arbitrary for TxParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<[u8; 32]>(), recipient(), amount())
            .prop_map(|(seed, recipient, amount)| TxParams {
                seed,
                recipient,
                amount,
            })
            .boxed()
    }
}

/// Sign a transaction from parameters. Sender is the seed keypair's own
/// identity, so the result must verify.
pub fn transaction_from_params(params: &TxParams) -> Transaction {
    let kp = Keypair::from_seed(&params.seed);
    let sender = Identity::from_public_key(&kp.public_key());
    TransactionDraft::new(sender, params.recipient.clone(), params.amount).sign(&kp)
}
