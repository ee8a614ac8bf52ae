// Duration-based bottleneck analysis
//
// Objective: rank activities by how long cases sit at them before moving
// on, not by how often they occur.
//
// Key insight: a frequent activity can be instant while a rare approval
// step holds every case for hours. Counting edges finds structure; only
// elapsed time finds the queue.
//
// The mean time-to-next-event is a proxy signal, not a queueing-delay
// measurement. No variance or percentile reporting here.

mod gaps;
mod ranking;

pub use gaps::{case_gaps, flag_short_gaps, EventGap};
pub use ranking::{rank_bottlenecks, ActivityDuration};
