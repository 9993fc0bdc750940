//! 栄養素の計算
//!
//! 100gあたりの値から一食分への換算と、日ごとの合計を扱う。

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// 4種類の栄養素（カロリー・たんぱく質・脂質・炭水化物）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        proteins: 0.0,
        fats: 0.0,
        carbohydrates: 0.0,
    };

    pub fn new(calories: f64, proteins: f64, fats: f64, carbohydrates: f64) -> Self {
        Self {
            calories,
            proteins,
            fats,
            carbohydrates,
        }
    }

    /// 100gあたりの値を `grams` グラム分に換算
    pub fn scaled(&self, grams: f64) -> Macros {
        scale(self, grams)
    }
}

/// 100gあたりの栄養素を一食分に換算する
///
/// 各値を `値 / 100 * grams` で線形変換する。丸めは表示時のみ行うため
/// ここでは行わない。`grams` の0・負数チェックもしない。
pub fn scale(per_100g: &Macros, grams: f64) -> Macros {
    Macros {
        calories: per_100g.calories / 100.0 * grams,
        proteins: per_100g.proteins / 100.0 * grams,
        fats: per_100g.fats / 100.0 * grams,
        carbohydrates: per_100g.carbohydrates / 100.0 * grams,
    }
}

/// 栄養素の合計
pub fn totals<'a>(items: impl IntoIterator<Item = &'a Macros>) -> Macros {
    items.into_iter().copied().sum()
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            calories: self.calories + rhs.calories,
            proteins: self.proteins + rhs.proteins,
            fats: self.fats + rhs.fats,
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Macros {
        iter.fold(Macros::ZERO, Add::add)
    }
}
