use rstest::rstest;

use super::Direction;

#[rstest]
#[case(Direction::North, 1, Direction::South)]
#[case(Direction::East, 2, Direction::West)]
#[case(Direction::South, 4, Direction::North)]
#[case(Direction::West, 8, Direction::East)]
fn bit_and_opposite(#[case] dir: Direction, #[case] bit: u8, #[case] opposite: Direction) {
	assert_eq!(dir.bit(), bit);
	assert_eq!(dir.opposite(), opposite);
	assert_eq!(dir.opposite().opposite(), dir);
}

#[test]
fn all_is_north_east_south_west() {
	let bits: Vec<u8> = Direction::ALL.iter().map(|d| d.bit()).collect();
	assert_eq!(bits, [1, 2, 4, 8]);
}

#[test]
fn opposite_offsets_cancel() {
	for dir in Direction::ALL {
		let (dx, dy) = dir.offset();
		let (ox, oy) = dir.opposite().offset();
		assert_eq!((dx + ox, dy + oy), (0, 0));
		assert_eq!(dx.abs() + dy.abs(), 1);
	}
}
