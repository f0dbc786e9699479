use crate::cpi::token::transfer_with_signer_seeds;
use crate::instructions::redeem::pay_out_redemption;
use crate::state::{load_position_accounts, SharesHolder};
use crate::{RedeemShares, VaultDepositorAction};
use anchor_lang::prelude::*;

/// Redeems shares for principal plus the same fraction of every registered position token account.
/// Remaining accounts are `(vault position account, receiver position account)` pairs.
pub fn multi_redeem_shares<'info>(
    ctx: Context<'_, '_, 'info, 'info, RedeemShares<'info>>,
    shares: u64,
) -> Result<()> {
    let clock = &Clock::get()?;
    let receiver = ctx.accounts.receiver_token_account.owner;

    let holder = SharesHolder::from(&**ctx.accounts.owner_shares_account);

    let mut vault = ctx.accounts.vault.load_mut()?;

    vault.validate_redeem(
        shares,
        &holder,
        ctx.accounts.authority.key,
        &receiver,
        clock.unix_timestamp,
    )?;

    let position_accounts = load_position_accounts(ctx.remaining_accounts, &vault, &receiver)?;

    let redemption = vault.redeem(
        shares,
        &holder,
        ctx.accounts.authority.key,
        receiver,
        ctx.accounts.shares_mint.supply,
        ctx.accounts.vault_token_account.amount,
        VaultDepositorAction::MultiRedeem,
        clock.unix_timestamp,
    )?;

    let mut position_amounts = Vec::with_capacity(position_accounts.len());
    for position in position_accounts.iter() {
        position_amounts.push(vault.redeem_position(
            &redemption,
            position.mint,
            position.vault_position_account.amount,
            receiver,
            clock.unix_timestamp,
        )?);
    }

    let name = vault.name;
    let bump = vault.bump;
    drop(vault);

    pay_out_redemption(&ctx, &redemption, name, bump)?;

    for (position, amount) in position_accounts.iter().zip(position_amounts) {
        if amount == 0 {
            continue;
        }

        transfer_with_signer_seeds(
            amount,
            name,
            bump,
            position.vault_position_account.to_account_info(),
            position.receiver_position_account.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
        )?;
    }

    msg!(
        "redeemed {} shares for {} and {} positions to {}",
        redemption.shares,
        redemption.amount,
        position_accounts.len(),
        receiver
    );

    Ok(())
}
