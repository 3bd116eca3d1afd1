//! Tests for automatic adjacency rule inference from tile pixel edges.

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgba, RgbaImage};

    use wavetile::edge_inference::infer_rules;
    use wavetile::rules::Direction;
    use wavetile::spatial::TileSet;

    /// A 4x4 image split into four solid-color 2x2 tiles: red, green, blue,
    /// yellow, laid out row-major.
    fn solid_color_grid() -> DynamicImage {
        let colors = [
            Rgba([255, 0, 0, 255]),
            Rgba([0, 255, 0, 255]),
            Rgba([0, 0, 255, 255]),
            Rgba([255, 255, 0, 255]),
        ];
        let mut image = RgbaImage::new(4, 4);
        for row in 0..2u32 {
            for col in 0..2u32 {
                let color = colors[(row * 2 + col) as usize];
                for y in 0..2 {
                    for x in 0..2 {
                        image.put_pixel(col * 2 + x, row * 2 + y, color);
                    }
                }
            }
        }
        DynamicImage::ImageRgba8(image)
    }

    // Scenario 6: solid-color tiles only match themselves, in every
    // direction, since no two distinct solid colors share a pixel strip.
    #[test]
    fn solid_color_tiles_only_match_themselves() {
        let image = solid_color_grid();
        let tileset = TileSet::from_image(&image, 2, 2, "solids").unwrap();
        let rules = infer_rules(&tileset, "solids", "test", 1).unwrap();

        for index in 1..=4u32 {
            let allowed = rules.get_rule_by_index(index).unwrap().expand();
            for direction in Direction::ALL {
                assert_eq!(allowed[&direction], [index].into_iter().collect());
            }
        }
    }

    #[test]
    fn rules_are_symmetric() {
        let image = solid_color_grid();
        let tileset = TileSet::from_image(&image, 2, 2, "solids").unwrap();
        let rules = infer_rules(&tileset, "solids", "test", 1).unwrap();

        for index in 1..=4u32 {
            let allowed = rules.get_rule_by_index(index).unwrap().expand();
            for up_neighbor in &allowed[&Direction::Up] {
                let neighbor_allowed = rules.get_rule_by_index(*up_neighbor).unwrap().expand();
                assert!(neighbor_allowed[&Direction::Down].contains(&index));
            }
            for left_neighbor in &allowed[&Direction::Left] {
                let neighbor_allowed = rules.get_rule_by_index(*left_neighbor).unwrap().expand();
                assert!(neighbor_allowed[&Direction::Right].contains(&index));
            }
        }
    }
}
