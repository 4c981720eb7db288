pub mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod pool;
pub mod roll;
pub mod solver;

pub use parser::parse;
pub use pool::build_notation;
pub use pool::is_valid_pool;
pub use roll::roll_many;
pub use roll::roll_one;
pub use solver::evaluate;

#[cfg(test)]
mod tests {
    use crate::dice::Group;
    use crate::error::Error;
    use crate::evaluator::limits::MAX_DICE_AMOUNT;
    use crate::roll::Source;
    use crate::solver::evaluate;
    use crate::solver::evaluate_with_source;
    use crate::solver::Solver;

    pub struct MockIter<'a, T: Iterator<Item = u64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u64>> Source for MockIter<'_, T> {
        fn throw(&mut self, sides: u64) -> u64 {
            match self.iter.next() {
                Some(value) => {
                    if value > sides {
                        panic!("Tried to return {} for a {} sided dice", value, sides)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    #[test]
    fn single_test() {
        let r = Solver::new("2d6 + 6");
        let roll_mock = vec![3, 5];
        let res = r
            .solve_with_source(&mut MockIter {
                iter: &mut roll_mock.into_iter(),
            })
            .unwrap();
        assert_eq!(1, res.rolls().len());
        assert_eq!(&[3, 5], res.rolls()[0].results());
        assert_eq!(8, res.subtotal());
        assert_eq!(14, res.total());
        assert_eq!("2d6 + 6", res.notation());
        eprintln!("{}", res);
    }

    #[test]
    fn modifier_total_test() {
        let res = evaluate("1d6+5").unwrap();
        assert_eq!(1, res.rolls().len());
        assert_eq!(res.rolls()[0].subtotal() + 5, res.total());
    }

    #[test]
    fn multi_group_test() {
        let res = evaluate("2d6+1d8").unwrap();
        assert_eq!(2, res.rolls().len());
        assert_eq!(2, res.rolls()[0].results().len());
        assert_eq!(1, res.rolls()[1].results().len());
        assert!(res.rolls()[1].results()[0] <= 8);
        let sum: i64 = res.rolls().iter().map(|r| r.subtotal()).sum();
        assert_eq!(sum, res.subtotal());
        assert_eq!(sum, res.total());
    }

    #[test]
    fn counting_roller_test() {
        let rolls = vec![3, 6, 3, 17, 2];
        let res = evaluate_with_source(
            "3d6+1d20-1d4+1+2",
            &mut MockIter {
                iter: &mut rolls.into_iter(),
            },
        )
        .unwrap();
        assert_eq!(3, res.rolls().len());
        assert_eq!(12, res.rolls()[0].subtotal());
        assert_eq!(17, res.rolls()[1].subtotal());
        assert_eq!(2, res.rolls()[2].subtotal());
        assert_eq!(3, res.modifier());
        assert_eq!(31, res.subtotal());
        assert_eq!(34, res.total());
    }

    #[test]
    fn one_dice_test() {
        let roll_mock = vec![8];
        let res = Solver::new("d20")
            .solve_with_source(&mut MockIter {
                iter: &mut roll_mock.into_iter(),
            })
            .unwrap();
        assert_eq!(Group::new(20, 1), res.rolls()[0].group());
        assert_eq!(8, res.total());
    }

    #[test]
    fn one_value_test() {
        let res = evaluate("20").unwrap();
        assert!(res.rolls().is_empty());
        assert_eq!(0, res.subtotal());
        assert_eq!(20, res.total());
    }

    #[test]
    fn empty_test() {
        for input in ["", "nothing to see", "+", "d"] {
            let res = evaluate(input).unwrap();
            assert!(res.rolls().is_empty());
            assert_eq!(0, res.total());
            assert_eq!(input, res.notation());
        }
    }

    #[test]
    fn zero_count_group_test() {
        let res = evaluate("0d6+2").unwrap();
        assert_eq!(1, res.rolls().len());
        assert!(res.rolls()[0].results().is_empty());
        assert_eq!(2, res.total());
    }

    #[test]
    fn too_many_dice_test() {
        let notation = format!("1d6+{}d6", MAX_DICE_AMOUNT + 1);
        assert_eq!(
            Error::TooManyDice(MAX_DICE_AMOUNT),
            evaluate(&notation).unwrap_err()
        );
        let notation = format!("{}d4", MAX_DICE_AMOUNT);
        let res = evaluate(&notation).unwrap();
        assert_eq!(MAX_DICE_AMOUNT as usize, res.rolls()[0].results().len());
    }

    #[test]
    fn no_dice_thrown_on_error_test() {
        let notation = format!("1d6+{}d6", MAX_DICE_AMOUNT + 1);
        let mut empty = std::iter::empty::<u64>();
        let res = evaluate_with_source(&notation, &mut MockIter { iter: &mut empty });
        assert!(res.is_err());
    }

    #[test]
    fn huge_dice_overflow_test() {
        let res = evaluate_with_source(
            "2d18446744073709551615",
            &mut MockIter {
                iter: &mut vec![u64::MAX, u64::MAX].into_iter(),
            },
        );
        assert_eq!(Err(Error::Overflow), res);

        let res = evaluate_with_source(
            "1d6+9223372036854775807",
            &mut MockIter {
                iter: &mut vec![6].into_iter(),
            },
        );
        assert_eq!(Err(Error::Overflow), res);

        let res = evaluate_with_source(
            "1d6+9223372036854775801",
            &mut MockIter {
                iter: &mut vec![6].into_iter(),
            },
        )
        .unwrap();
        assert_eq!(i64::MAX, res.total());
    }

    #[test]
    fn reorder_keeps_total_test() {
        let forward = evaluate_with_source(
            "2d6+1d20+3",
            &mut MockIter {
                iter: &mut vec![4, 2, 15].into_iter(),
            },
        )
        .unwrap();
        let backward = evaluate_with_source(
            "1d20+2d6+3",
            &mut MockIter {
                iter: &mut vec![15, 4, 2].into_iter(),
            },
        )
        .unwrap();
        assert_eq!(forward.total(), backward.total());
        assert_eq!(24, forward.total());
    }

    #[test]
    fn dices_test() {
        let r = Solver::new("3D6 + d20 - 2");
        let dices: Vec<_> = r.dices().collect();
        assert_eq!(vec!["3d6".to_owned(), "1d20".to_owned()], dices);
        assert_eq!("3D6 + d20 - 2", r.as_str());
        assert_eq!("3d6 + 1d20 - 2", r.expression().to_string());
    }

    #[test]
    fn timestamp_test() {
        let before = chrono::Utc::now();
        let res = evaluate("1d4").unwrap();
        let after = chrono::Utc::now();
        assert!(before <= res.timestamp() && res.timestamp() <= after);
    }
}
