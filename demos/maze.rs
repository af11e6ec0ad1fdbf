use env_logger::Env;
use grid_astar::prelude::*;

const MAZE: &str = "
**************************
* * *     S              *
* * *  *  *************  *
* *   *    ************  *
*    *                   *
************** ***********
*                        *
** ***********************
*      *              G  *
*  *      *********** *  *
*    *        ******* *  *
*       *                *
**************************
";

fn main() {
    env_logger::init_from_env(Env::default().filter_or("MY_LOG_LEVEL", "debug"));

    let layout: Layout = match MAZE.parse() {
        Ok(layout) => layout,
        Err(err) => {
            log::error!("invalid maze: {}", err);
            std::process::exit(1);
        }
    };
    let (Some(start), Some(goal)) = (layout.start, layout.goal) else {
        log::error!("the maze needs both an S and a G marker");
        std::process::exit(1);
    };

    match layout.grid.find_path(start, goal) {
        Ok(path) => {
            println!("{}", render(&layout.grid, &path, &Glyphs::MAZE));
            println!("{} steps", path.cost());
        }
        Err(err) => {
            println!("failed: {}", err);
            std::process::exit(1);
        }
    }
}
