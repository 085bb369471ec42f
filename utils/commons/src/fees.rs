use super::*;

use core::ops::Add;

/// Fee and royalty rates are expressed in basis points, 1/100th of a percent.
pub const MAX_BASIS_POINTS: u16 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, SchemaType)]
pub struct BasisPoints(u16);

impl BasisPoints {
    pub fn new(rate: u16) -> Self {
        Self(rate)
    }

    pub fn rate(&self) -> u16 {
        self.0
    }

    /// Whether the rate can be applied to a settlement at all.
    pub fn is_valid(&self) -> bool {
        self.0 <= MAX_BASIS_POINTS
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// The rate applied to an amount. Integer division truncates toward
    /// zero; the remainder is accounted for in [split_proceeds].
    pub fn of_amount(&self, amount: Amount) -> Amount {
        Amount::from_micro_ccd(
            (amount.micro_ccd as u128 * self.0 as u128 / MAX_BASIS_POINTS as u128) as u64,
        )
    }
}

impl Add for BasisPoints {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        BasisPoints(self.0 + rhs.0)
    }
}

/// Outcome of splitting a settlement amount between the three parties of a
/// sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct FeeSplit {
    /// Platform cut, transferred to the fee beneficiary.
    pub platform: Amount,
    /// Royalty cut, transferred to the royalty beneficiary.
    pub royalty: Amount,
    /// Remainder, transferred to the seller.
    pub seller: Amount,
}

/// Split a settlement amount into platform cut, royalty cut and seller
/// proceeds. Both cuts truncate toward zero and the full truncation
/// remainder goes to the seller, so the three parts always add up to the
/// total exactly. This is the only place where rounding is resolved.
///
/// Callers must have rejected `platform_fee + royalty > 10000` when the
/// listing, auction or mint was created. Settlement itself never fails on
/// rates.
pub fn split_proceeds(total: Amount, platform_fee: BasisPoints, royalty: BasisPoints) -> FeeSplit {
    let platform = platform_fee.of_amount(total);
    let royalty = royalty.of_amount(total);
    FeeSplit {
        platform,
        royalty,
        seller: total - platform - royalty,
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_split_reconciles_exactly() {
        // Totals picked to exercise truncation in both cuts.
        let totals = [0u64, 1, 3, 7, 999, 10_000, 123_457, u64::MAX / 10_000];
        let rates = [0u16, 1, 250, 333, 500, 2_500, 9_999];

        for &total in totals.iter() {
            let total = Amount::from_micro_ccd(total);
            for &fee in rates.iter() {
                for &royalty in rates.iter() {
                    if fee as u32 + royalty as u32 > MAX_BASIS_POINTS as u32 {
                        continue;
                    }
                    let split =
                        split_proceeds(total, BasisPoints::new(fee), BasisPoints::new(royalty));
                    claim_eq!(
                        split.platform + split.royalty + split.seller,
                        total,
                        "Split must reconcile to the total"
                    );
                }
            }
        }
    }

    #[concordium_test]
    fn test_truncation_remainder_goes_to_seller() {
        // 3 micro CCD at 2.5%: both cuts truncate to zero, the seller keeps
        // everything.
        let split = split_proceeds(
            Amount::from_micro_ccd(3),
            BasisPoints::new(250),
            BasisPoints::new(250),
        );
        claim_eq!(split.platform, Amount::zero());
        claim_eq!(split.royalty, Amount::zero());
        claim_eq!(split.seller, Amount::from_micro_ccd(3));
    }

    #[concordium_test]
    fn test_sale_scenario() {
        // Sale at 1.0 CCD, 2.5% platform fee, 5% royalty.
        let split = split_proceeds(
            Amount::from_ccd(1),
            BasisPoints::new(250),
            BasisPoints::new(500),
        );
        claim_eq!(split.platform, Amount::from_micro_ccd(25_000));
        claim_eq!(split.royalty, Amount::from_micro_ccd(50_000));
        claim_eq!(split.seller, Amount::from_micro_ccd(925_000));
    }

    #[concordium_test]
    fn test_minting_fee_scenario() {
        // Mint paying 0.01 CCD with a 2.5% minting fee: 0.00025 CCD to the
        // platform, 0.00975 CCD back to the creator.
        let paid = Amount::from_micro_ccd(10_000);
        let fee = BasisPoints::new(250).of_amount(paid);
        claim_eq!(fee, Amount::from_micro_ccd(250));
        claim_eq!(paid - fee, Amount::from_micro_ccd(9_750));
    }

    #[concordium_test]
    fn test_rate_bounds() {
        claim!(BasisPoints::new(MAX_BASIS_POINTS).is_valid());
        claim!(!BasisPoints::new(MAX_BASIS_POINTS + 1).is_valid());
        claim_eq!(
            BasisPoints::new(250).checked_add(BasisPoints::new(500)),
            Some(BasisPoints::new(750))
        );
        claim_eq!(
            BasisPoints::new(u16::MAX).checked_add(BasisPoints::new(1)),
            None
        );
    }
}
