use crate::*;
use actix::prelude::*;
use std::{
    fmt,
    io::{self, Write},
};


/// Reporter actor is the only writer of status lines
pub struct Reporter {
    output: Box<dyn Write>,
    written: usize,
}


/// Story to write as a status line
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Report(pub Story);


/// Flushes the output. Replies with number of lines written so far.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "usize")]
pub struct Flush;


impl Reporter {
    /// Reporter writing to given output
    pub fn new(output: Box<dyn Write>) -> Reporter {
        Reporter { output, written: 0 }
    }


    /// Reporter writing to standard output
    pub fn stdout() -> Reporter {
        Reporter::new(Box::new(io::stdout()))
    }
}


impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("written", &self.written)
            .finish()
    }
}


impl Handler<Report> for Reporter {
    type Result = ();

    fn handle(&mut self, report: Report, _ctx: &mut Self::Context) -> Self::Result {
        match writeln!(self.output, "{}", report.0) {
            Ok(()) => self.written += 1,
            Err(err) => error!("Couldn't write status of {}: {}", report.0.domain, err),
        }
    }
}


impl Handler<Flush> for Reporter {
    type Result = usize;

    fn handle(&mut self, _flush: Flush, _ctx: &mut Self::Context) -> Self::Result {
        self.output.flush().unwrap_or_else(|err| {
            error!("Couldn't flush output: {}", err);
        });
        self.written
    }
}


impl Actor for Reporter {
    type Context = Context<Self>;
}
