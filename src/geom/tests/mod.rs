mod test_analysis_basic;
mod test_sampler_basic;
