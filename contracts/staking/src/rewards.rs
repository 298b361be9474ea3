use soroban_sdk::{Env, I256};

/// Fixed-point scaling factor for reward indices.
///
/// Index values are stored multiplied by this constant so that
/// `amount / total_weight` keeps eighteen decimal places under integer
/// division.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Multiplier value meaning 1.0x, in basis points.
pub const MULTIPLIER_BASE_BPS: u32 = 10_000;

/// Upper bound for any configured lock multiplier (3.0x).
pub const MAX_MULTIPLIER_BPS: u32 = 30_000;

// ── Index accumulation ──────────────────────────────────────────────────────

/// `a × b / c`, truncated, through a 256-bit intermediate so the product
/// never overflows. `None` if `c` is not positive or the quotient does not
/// fit in an i128.
fn mul_div(env: &Env, a: i128, b: i128, c: i128) -> Option<i128> {
    if c <= 0 {
        return None;
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, c))
        .to_i128()
}

/// Index growth produced by injecting `amount` reward tokens.
///
/// ```text
/// Δindex = amount × SCALE / total_weight
/// ```
///
/// Returns `None` when the result does not fit or `total_weight` is not
/// positive. Truncation in the division always rounds in favour of the
/// pool.
pub fn index_increment(env: &Env, amount: i128, total_weight: i128) -> Option<i128> {
    mul_div(env, amount, SCALE, total_weight)
}

/// Rewards earned by `weight` while the index moved from `settled_index`
/// to `current_index`.
///
/// ```text
/// delta = weight × (current_index − settled_index) / SCALE
/// ```
///
/// The index never decreases, so a negative difference means the caller
/// passed a stale pair and is reported as `None`.
pub fn accrued_since(
    env: &Env,
    weight: i128,
    current_index: i128,
    settled_index: i128,
) -> Option<i128> {
    let growth = current_index.checked_sub(settled_index)?;
    if growth < 0 || weight < 0 {
        return None;
    }
    mul_div(env, weight, growth, SCALE)
}

// ── Lock multiplier ─────────────────────────────────────────────────────────

/// Multiplier for a lock of `duration` seconds.
///
/// Linear from 1.0x at `min_lock` to `max_multiplier_bps` at `max_lock`.
/// `duration` is clamped into the bounds first.
pub fn lock_multiplier_bps(
    duration: u64,
    min_lock: u64,
    max_lock: u64,
    max_multiplier_bps: u32,
) -> u32 {
    if max_lock <= min_lock || max_multiplier_bps <= MULTIPLIER_BASE_BPS {
        return MULTIPLIER_BASE_BPS;
    }
    let clamped = duration.clamp(min_lock, max_lock);
    let span = (max_lock - min_lock) as u128;
    let bonus_range = (max_multiplier_bps - MULTIPLIER_BASE_BPS) as u128;
    let bonus = bonus_range * (clamped - min_lock) as u128 / span;
    // bonus <= bonus_range, which fits in u32.
    MULTIPLIER_BASE_BPS + bonus as u32
}

/// Reward weight of `balance` staked at `multiplier_bps`.
pub fn weight_of(balance: i128, multiplier_bps: u32) -> Option<i128> {
    balance
        .checked_mul(multiplier_bps as i128)?
        .checked_div(MULTIPLIER_BASE_BPS as i128)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure arithmetic; the environment only hosts the 256-bit intermediate.
