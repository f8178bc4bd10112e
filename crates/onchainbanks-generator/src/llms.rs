//! `llms.txt` dataset descriptor for language-model crawlers.

use onchainbanks_core::Config;

use crate::index::SiteIndex;

/// Render `llms.txt`.
#[must_use]
pub fn llms_txt(config: &Config, index: &SiteIndex<'_>) -> String {
    let site = &config.site;
    let total = index.total();
    let nc_percent = index.non_custodial_percent();

    format!(
        "# {title}
> The comprehensive database of onchain banks, crypto debit cards, and DeFi spending products.

## About
{title} tracks {total}+ crypto card and onchain banking products across all major chains. We provide detailed comparisons, infrastructure analysis, and industry research.

## Key Data
- {total}+ onchain banking products tracked
- Coverage across Solana, Ethereum, Base, Bitcoin, and {chains}+ chains
- Custody analysis: {nc_percent}% non-custodial, {custodial_percent}% custodial
- Card issuer infrastructure mapping
- Funding and investment tracking

## Pages
- /bank/[name]/ - Individual bank profiles
- /compare/[bank1]-vs-[bank2]/ - Head-to-head comparisons
- /chain/[chain]/ - Banks by blockchain

## API
- /api/banks.json - Public structured data for all tracked banks

## Full Reviews
For complete reviews, ratings, and interactive comparisons, visit {review_host}
",
        title = site.title,
        chains = index.unique_chains(),
        custodial_percent = 100 - nc_percent,
        review_host = config.review_host(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::bank;

    #[test]
    fn test_llms_txt() {
        let banks = vec![
            bank("Gnosis Pay", "Gnosis", "Non-Custodial", "5%", "$0"),
            bank("Coinbase", "Base", "Custodial", "4%", "$0"),
            bank("Bybit", "14 chains", "Custodial", "10%", "$0"),
            bank("Fold", "Bitcoin", "Custodial", "3.5%", "$0"),
        ];
        let index = SiteIndex::new(&banks);
        let text = llms_txt(&Config::default(), &index);

        assert!(text.starts_with("# OnchainBanks.io\n> The comprehensive database"));
        assert!(text.contains("OnchainBanks.io tracks 4+ crypto card"));
        assert!(text.contains("and 4+ chains"));
        assert!(text.contains("Custody analysis: 25% non-custodial, 75% custodial"));
        assert!(text.contains("- /api/banks.json - Public structured data"));
        assert!(text.ends_with("visit spendbase.cards\n"));
    }

    #[test]
    fn test_llms_txt_empty() {
        let index = SiteIndex::new(&[]);
        let text = llms_txt(&Config::default(), &index);

        assert!(text.contains("Custody analysis: 0% non-custodial, 100% custodial"));
    }
}
