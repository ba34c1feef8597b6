use super::Point;
use crate::Direction;

#[test]
fn step_moves_one_square() {
	let origin = Point::new(3, 3);
	assert_eq!(origin.step(Direction::North), Some(Point::new(3, 2)));
	assert_eq!(origin.step(Direction::East), Some(Point::new(4, 3)));
	assert_eq!(origin.step(Direction::South), Some(Point::new(3, 4)));
	assert_eq!(origin.step(Direction::West), Some(Point::new(2, 3)));
}

#[test]
fn step_off_the_origin_goes_negative() {
	let origin = Point::new(0, 0);
	assert_eq!(origin.step(Direction::North), Some(Point::new(0, -1)));
	assert_eq!(origin.step(Direction::West), Some(Point::new(-1, 0)));
}

#[test]
fn step_off_coordinate_range_is_none() {
	let corner = Point::new(i32::MAX, i32::MIN);
	assert_eq!(corner.step(Direction::East), None);
	assert_eq!(corner.step(Direction::North), None);
	assert_eq!(corner.step(Direction::West), Some(Point::new(i32::MAX - 1, i32::MIN)));
	assert_eq!(corner.step(Direction::South), Some(Point::new(i32::MAX, i32::MIN + 1)));
}
