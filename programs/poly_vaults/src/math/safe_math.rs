use crate::error::{ErrorCode, VaultResult};
use anchor_lang::prelude::*;
use std::panic::Location;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> VaultResult<Self>;
    fn safe_sub(self, rhs: Self) -> VaultResult<Self>;
    fn safe_mul(self, rhs: Self) -> VaultResult<Self>;
    fn safe_div(self, rhs: Self) -> VaultResult<Self>;
    fn safe_div_ceil(self, rhs: Self) -> VaultResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t) -> VaultResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t) -> VaultResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t) -> VaultResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t) -> VaultResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div_ceil(self, v: $t) -> VaultResult<$t> {
                let quotient = self.safe_div(v)?;
                if self % v != 0 {
                    quotient.safe_add(1)
                } else {
                    Ok(quotient)
                }
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(u16);

#[cfg(test)]
mod test {
    use super::SafeMath;
    use crate::error::ErrorCode;

    #[test]
    fn safe_div_ceil() {
        assert_eq!(10_u64.safe_div_ceil(5), Ok(2));
        assert_eq!(11_u64.safe_div_ceil(5), Ok(3));
        assert_eq!(0_u64.safe_div_ceil(5), Ok(0));
        assert_eq!(1_u128.safe_div_ceil(10_000), Ok(1));
        assert_eq!(1_u64.safe_div_ceil(0), Err(ErrorCode::MathError));
    }

    #[test]
    fn overflow_and_underflow() {
        assert_eq!(u64::MAX.safe_add(1), Err(ErrorCode::MathError));
        assert_eq!(0_u64.safe_sub(1), Err(ErrorCode::MathError));
        assert_eq!(u128::MAX.safe_mul(2), Err(ErrorCode::MathError));
        assert_eq!(7_u16.safe_sub(7), Ok(0));
    }
}
